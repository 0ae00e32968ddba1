use base64::{Engine as _, engine::general_purpose};

use crate::domain::{ApiSecret, ApiToken};

/// `Authorization` header value for HTTP Basic auth: `Basic base64(token:secret)`.
pub fn sign_basic(token: &ApiToken, secret: &ApiSecret) -> String {
    let pair = format!("{}:{}", token.as_str(), secret.as_str());
    format!("Basic {}", general_purpose::STANDARD.encode(pair))
}
