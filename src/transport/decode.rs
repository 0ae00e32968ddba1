use serde_json::Value;

use super::TransportError;
use crate::domain::{JsonArray, JsonObject, ParsedResult};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Decode a successful response body according to its declared content type.
///
/// JSON is only parsed when the content type starts with `application/json`
/// and the body is not blank; anything else is handed back as opaque text.
pub fn decode_parsed(
    content_type: Option<&str>,
    body: &str,
) -> Result<ParsedResult, TransportError> {
    if body.trim().is_empty() {
        return Ok(ParsedResult::Empty);
    }
    if !is_json(content_type) {
        return Ok(ParsedResult::Text(body.to_owned()));
    }

    match serde_json::from_str::<Value>(body)? {
        Value::Object(object) => Ok(ParsedResult::Object(object)),
        Value::Array(array) => Ok(ParsedResult::Array(array)),
        _ => Err(TransportError::UnexpectedShape {
            expected: "object or array",
            found: "scalar",
        }),
    }
}

pub fn decode_object(content_type: Option<&str>, body: &str) -> Result<JsonObject, TransportError> {
    match decode_parsed(content_type, body)? {
        ParsedResult::Object(object) => Ok(object),
        other => Err(TransportError::UnexpectedShape {
            expected: "object",
            found: other.kind(),
        }),
    }
}

pub fn decode_array(content_type: Option<&str>, body: &str) -> Result<JsonArray, TransportError> {
    match decode_parsed(content_type, body)? {
        ParsedResult::Array(array) => Ok(array),
        other => Err(TransportError::UnexpectedShape {
            expected: "array",
            found: other.kind(),
        }),
    }
}

/// Narrow an array element down to the JSON object a record is built from.
pub fn expect_object(value: Value) -> Result<JsonObject, TransportError> {
    match value {
        Value::Object(object) => Ok(object),
        Value::Array(_) => Err(TransportError::UnexpectedShape {
            expected: "object",
            found: "array",
        }),
        _ => Err(TransportError::UnexpectedShape {
            expected: "object",
            found: "scalar",
        }),
    }
}

/// Best-effort `message` and `code` from an error body; `None`s when the body is not JSON.
///
/// Each field is read on its own, so a malformed one does not hide the other.
pub fn decode_error_fields(body: &str) -> (Option<String>, Option<String>) {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(body) else {
        return (None, None);
    };
    let message = object
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let code = object.get("code").and_then(|code| match code {
        Value::Null | Value::Array(_) | Value::Object(_) => None,
        Value::String(code) => Some(code.clone()),
        other => Some(other.to_string()),
    });
    (message, code)
}

/// Identifier of a created resource: the last non-empty path segment of its location.
pub fn id_from_location(location: &str) -> Option<String> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_owned)
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| {
        value
            .trim_start()
            .to_ascii_lowercase()
            .starts_with(JSON_CONTENT_TYPE)
    })
}
