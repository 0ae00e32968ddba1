use serde::Deserialize;

/// Money-like value (`balance`, `price`, `amount`) sent as either JSON string or JSON number.
///
/// Strings are kept verbatim, so `"538.37250"` stays `"538.37250"`. Numbers
/// go through `serde_json::Number` formatting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransportMoney {
    String(String),
    Number(serde_json::Number),
}

impl TransportMoney {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}
