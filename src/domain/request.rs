/// Ordered parameter map accumulated by builders and sent with a request.
///
/// Keys keep insertion order: GET/DELETE query strings and POST/PUT JSON
/// bodies are emitted in the order the caller added them.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// HTTP method of a REST call.
///
/// `Get` and `Delete` encode parameters into the query string, `Post` and
/// `Put` send them as a JSON object body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in a JSON body rather than the query string.
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
