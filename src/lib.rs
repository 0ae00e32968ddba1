//! Typed Rust client for the Catapult (Bandwidth App Platform) REST API.
//!
//! The crate is split in three layers: a domain layer of validated values and
//! plain records, a transport layer for wire-format details, and a client
//! layer that signs, sends and decodes requests and hands out typed
//! collection facades.
//!
//! ```rust,no_run
//! use catapult::{CatapultClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), catapult::CatapultError> {
//!     let client = CatapultClient::new(Credentials::new("u-123", "t-abc", "secret")?);
//!     let numbers = client
//!         .available_numbers()
//!         .search_local()
//!         .state("NC")
//!         .quantity(2)
//!         .list()
//!         .await?;
//!     for number in numbers {
//!         println!("{}", number.number);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    CatapultClient, CatapultClientBuilder, CatapultError, Credentials, HttpRequest, HttpResponse,
    HttpTransport, Record,
};
pub use domain::{
    AccountInfo, AccountTransaction, ApiSecret, ApiToken, Application, AvailableNumber,
    HttpMethod, Identified, Message, Params, UserId, ValidationError,
};
