pub type JsonObject = serde_json::Map<String, serde_json::Value>;
pub type JsonArray = Vec<serde_json::Value>;

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResult {
    Object(JsonObject),
    Array(JsonArray),
    /// Body that was not declared as JSON.
    Text(String),
    Empty,
}

impl ParsedResult {
    /// Short shape name used in decoding errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Text(_) => "text",
            Self::Empty => "empty",
        }
    }
}

/// Outcome of a successful POST.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    /// The server echoed the created resource.
    Resource(JsonObject),
    /// The server only pointed at the new resource with a `Location` header.
    Location { location: String, id: String },
}
