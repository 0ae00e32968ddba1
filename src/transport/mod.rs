//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod auth;
mod decode;
mod endpoint;
mod money;
mod records;

pub use auth::sign_basic;
pub use decode::{
    decode_array, decode_error_fields, decode_object, decode_parsed, expect_object,
    id_from_location,
};
pub use endpoint::{build_url, expand_path, resolve_location};
pub use records::{
    decode_account_info, decode_account_transaction, decode_application,
    decode_available_number, decode_message,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected JSON {expected}, got {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("created response has neither a JSON body nor a usable Location header")]
    MissingLocation,

    #[error("refusing to follow Location on another origin: {location}")]
    ForeignLocation { location: String },
}
