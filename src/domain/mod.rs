//! Domain layer: strong types with validation and invariants (no I/O).

mod record;
mod request;
mod response;
mod validation;
mod value;

pub use record::{
    AccountInfo, AccountTransaction, Application, AvailableNumber, Identified, Message,
};
pub use request::{HttpMethod, Params};
pub use response::{Created, JsonArray, JsonObject, ParsedResult};
pub use validation::ValidationError;
pub use value::{ApiSecret, ApiToken, UserId};
