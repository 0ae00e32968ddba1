use serde_json::Value;
use url::Url;

use super::TransportError;
use crate::domain::Params;

/// Substitute `%s` placeholders in `template` with `args`, in order.
///
/// Each argument is percent-encoded as a single path segment. Placeholders
/// without a matching argument are left untouched and surplus arguments are
/// ignored.
pub fn expand_path(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut pieces = template.split("%s").peekable();

    while let Some(piece) = pieces.next() {
        out.push_str(piece);
        if pieces.peek().is_some() {
            match args.next() {
                Some(arg) => out.push_str(&urlencoding::encode(arg)),
                None => out.push_str("%s"),
            }
        }
    }

    out
}

/// Compose `{endpoint}/{version}/{path}` and append `query` pairs in insertion order.
///
/// `path` is used verbatim when it is already an absolute `http(s)` URL.
/// An empty or missing query adds no `?`.
pub fn build_url(
    endpoint: &str,
    version: &str,
    path: &str,
    query: Option<&Params>,
) -> Result<Url, url::ParseError> {
    let mut url = if is_absolute(path) {
        Url::parse(path)?
    } else {
        let joined = [
            endpoint.trim_end_matches('/'),
            version.trim_matches('/'),
            path.trim_start_matches('/'),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");
        Url::parse(&joined)?
    };

    if let Some(query) = query.filter(|query| !query.is_empty()) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, &query_value(value));
        }
    }

    Ok(url)
}

/// Resolve a `Location` header against the URL the request was sent to.
///
/// Only locations on the same origin as `endpoint` are accepted; the caller
/// signs the follow-up request.
pub fn resolve_location(
    endpoint: &str,
    request_url: &Url,
    location: &str,
) -> Result<Url, TransportError> {
    let resolved = request_url
        .join(location)
        .map_err(|_| TransportError::MissingLocation)?;
    let endpoint = Url::parse(endpoint).map_err(|_| TransportError::MissingLocation)?;
    if resolved.origin() != endpoint.origin() {
        return Err(TransportError::ForeignLocation {
            location: location.to_owned(),
        });
    }
    Ok(resolved)
}

/// String form of a parameter value as it appears in a query string.
pub fn query_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(value) => value.clone(),
        Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("https://") || path.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const ENDPOINT: &str = "https://api.catapult.inetwork.com";

    fn params(pairs: &[(&str, Value)]) -> Params {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect()
    }

    #[test]
    fn expands_placeholders_positionally() {
        assert_eq!(expand_path("users/%s/account", &["userId"]), "users/userId/account");
        assert_eq!(
            expand_path("users/%s/applications/%s", &["u-1", "a-2"]),
            "users/u-1/applications/a-2"
        );
    }

    #[test]
    fn expand_encodes_path_segments() {
        assert_eq!(expand_path("users/%s", &["a b/c"]), "users/a%20b%2Fc");
    }

    #[test]
    fn expand_keeps_unmatched_placeholders() {
        assert_eq!(expand_path("users/%s/x/%s", &["u"]), "users/u/x/%s");
        assert_eq!(expand_path("availableNumbers/local", &["unused"]), "availableNumbers/local");
    }

    #[test]
    fn builds_versioned_url_without_query() {
        let url = build_url(ENDPOINT, "v1", "users/userId/account", None).unwrap();
        assert_eq!(url.as_str(), "https://api.catapult.inetwork.com/v1/users/userId/account");

        let url = build_url(ENDPOINT, "v1", "users/userId/account", Some(&Params::new())).unwrap();
        assert_eq!(url.as_str(), "https://api.catapult.inetwork.com/v1/users/userId/account");
    }

    #[test]
    fn collapses_slashes_at_joins() {
        let url = build_url("https://host.invalid/", "/v1/", "/users/u", None).unwrap();
        assert_eq!(url.as_str(), "https://host.invalid/v1/users/u");

        let url = build_url("https://host.invalid", "", "users/u", None).unwrap();
        assert_eq!(url.as_str(), "https://host.invalid/users/u");
    }

    #[test]
    fn query_follows_insertion_order() {
        let query = params(&[("maxItems", json!("1000")), ("size", json!(10))]);
        let url = build_url(ENDPOINT, "v1", "users/userId/account/transactions", Some(&query)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.catapult.inetwork.com/v1/users/userId/account/transactions?maxItems=1000&size=10"
        );

        let reversed = params(&[("size", json!(10)), ("maxItems", json!("1000"))]);
        let url = build_url(ENDPOINT, "v1", "x", Some(&reversed)).unwrap();
        assert_eq!(url.query(), Some("size=10&maxItems=1000"));
    }

    #[test]
    fn query_contains_every_pair_encoded_and_nothing_else() {
        let query = params(&[
            ("text", json!("hello world & more")),
            ("from", json!("+19195551212")),
            ("receiptRequested", json!(true)),
        ]);
        let url = build_url(ENDPOINT, "v1", "m", Some(&query)).unwrap();
        let pairs = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("text".to_owned(), "hello world & more".to_owned()),
                ("from".to_owned(), "+19195551212".to_owned()),
                ("receiptRequested".to_owned(), "true".to_owned()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn absolute_paths_bypass_endpoint() {
        let url = build_url(
            ENDPOINT,
            "v1",
            "https://other.invalid/v1/users/u/applications/a-1",
            None,
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://other.invalid/v1/users/u/applications/a-1");
    }

    #[test]
    fn query_values_are_coerced_to_strings() {
        assert_eq!(query_value(&json!("NC")), "NC");
        assert_eq!(query_value(&json!(2)), "2");
        assert_eq!(query_value(&json!(false)), "false");
        assert_eq!(query_value(&json!(["a", 1])), "a,1");
        assert_eq!(query_value(&Value::Null), "");
    }

    #[test]
    fn location_resolves_against_request_url() {
        let request = Url::parse("https://api.catapult.inetwork.com/v1/users/u/messages").unwrap();

        let url = resolve_location(ENDPOINT, &request, "/v1/users/u/messages/m-9").unwrap();
        assert_eq!(url.as_str(), "https://api.catapult.inetwork.com/v1/users/u/messages/m-9");

        let url = resolve_location(ENDPOINT, &request, "messages/m-9").unwrap();
        assert_eq!(url.as_str(), "https://api.catapult.inetwork.com/v1/users/u/messages/m-9");

        let absolute = "https://api.catapult.inetwork.com/v1/users/u/messages/m-9";
        assert_eq!(resolve_location(ENDPOINT, &request, absolute).unwrap().as_str(), absolute);
    }

    #[test]
    fn location_on_another_origin_is_rejected() {
        let request = Url::parse("https://api.catapult.inetwork.com/v1/users/u/messages").unwrap();
        for location in [
            "https://evil.invalid/v1/users/u/messages/m-9",
            "http://api.catapult.inetwork.com/v1/users/u/messages/m-9",
            "//evil.invalid/m-9",
        ] {
            assert!(matches!(
                resolve_location(ENDPOINT, &request, location),
                Err(TransportError::ForeignLocation { .. })
            ));
        }
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        assert!(build_url("not a url", "v1", "x", None).is_err());
    }
}
