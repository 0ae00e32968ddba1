//! Client layer: signs and sends REST calls and hands out typed collection facades.

mod account;
mod applications;
mod builder;
mod driver;
mod messages;
mod numbers;
mod record;
mod resource;
#[cfg(test)]
pub(crate) mod testing;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiSecret, ApiToken, HttpMethod, UserId, ValidationError};

pub use account::Account;
pub use applications::Applications;
pub use builder::{CreateBuilder, QueryBuilder, RecordFactory};
pub use driver::{
    ACCOUNT_PATH, ACCOUNT_TRANSACTIONS_PATH, APPLICATIONS_PATH, LOCAL_AVAILABLE_NUMBERS_PATH,
    RestDriver, TOLL_FREE_AVAILABLE_NUMBERS_PATH, USER_PATH,
};
pub use messages::Messages;
pub use numbers::AvailableNumbers;
pub use record::Record;
pub use resource::ResourceClient;

pub const DEFAULT_ENDPOINT: &str = "https://api.catapult.inetwork.com";
pub const DEFAULT_API_VERSION: &str = "v1";

pub const USER_ID_ENV: &str = "CATAPULT_USER_ID";
pub const API_TOKEN_ENV: &str = "CATAPULT_API_TOKEN";
pub const API_SECRET_ENV: &str = "CATAPULT_API_SECRET";
pub const ENDPOINT_ENV: &str = "CATAPULT_ENDPOINT";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fully prepared request handed to an [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, query string included for GET/DELETE.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body for POST/PUT.
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value with a case-insensitive name match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as returned by an [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub location: Option<String>,
    pub body: String,
}

/// Executes prepared requests.
///
/// The default implementation is backed by `reqwest`; swap it through
/// [`CatapultClientBuilder::transport`] to route calls elsewhere (tests use a
/// recording fake). Implementations must not retry on their own.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(reqwest_method(request.method), &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let content_type = header_value(&response, reqwest::header::CONTENT_TYPE);
            let location = header_value(&response, reqwest::header::LOCATION);
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                content_type,
                location,
                body,
            })
        })
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn header_value(
    response: &reqwest::Response,
    name: reqwest::header::HeaderName,
) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

#[derive(Debug, Clone)]
/// Credentials for Catapult API calls.
///
/// The user id scopes account-level paths (`users/{userId}/...`); the token and
/// secret sign every request with HTTP Basic auth.
pub struct Credentials {
    user_id: UserId,
    token: ApiToken,
    secret: ApiSecret,
}

impl Credentials {
    /// Create credentials and validate that every part is non-empty.
    pub fn new(
        user_id: impl Into<String>,
        token: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            token: ApiToken::new(token)?,
            secret: ApiSecret::new(secret)?,
        })
    }

    /// Read credentials from `CATAPULT_USER_ID`, `CATAPULT_API_TOKEN` and `CATAPULT_API_SECRET`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::new(
            required_env(USER_ID_ENV)?,
            required_env(API_TOKEN_ENV)?,
            required_env(API_SECRET_ENV)?,
        )
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn token(&self) -> &ApiToken {
        &self.token
    }

    pub fn secret(&self) -> &ApiSecret {
        &self.secret
    }

    /// `Authorization` header value for these credentials.
    pub fn authorization(&self) -> String {
        crate::transport::sign_basic(&self.token, &self.secret)
    }
}

fn required_env(name: &'static str) -> Result<String, ValidationError> {
    std::env::var(name).map_err(|_| ValidationError::MissingEnv { name })
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`CatapultClient`] and everything built on it.
///
/// No variant is retried or recovered from inside the crate.
pub enum CatapultError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-2xx HTTP status returned by the server.
    ///
    /// `message` and `code` are lifted from a JSON error body when present.
    #[error("REST error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rest {
        status: u16,
        message: Option<String>,
        code: Option<String>,
        body: Option<String>,
    },

    /// Response body could not be parsed as the expected format or shape.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Request parameters could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured endpoint or a request path is not a valid URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CatapultError {
    /// HTTP status for [`CatapultError::Rest`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rest { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn parse(err: crate::transport::TransportError) -> Self {
        Self::Parse(Box::new(err))
    }
}

#[derive(Clone)]
/// Builder for [`CatapultClient`].
///
/// Use this when you need to customize the endpoint, API version, timeout,
/// user-agent, or the transport itself.
pub struct CatapultClientBuilder {
    credentials: Credentials,
    endpoint: String,
    api_version: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl CatapultClientBuilder {
    /// Create a builder with the default endpoint and version and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the API base URL (scheme and host, no version).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the version segment inserted after the endpoint.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is set.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Execute requests through `transport` instead of the built-in reqwest client.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`CatapultClient`].
    pub fn build(self) -> Result<CatapultClient, CatapultError> {
        url::Url::parse(&self.endpoint)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| CatapultError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(CatapultClient {
            driver: RestDriver::new(self.credentials, self.endpoint, self.api_version, http),
        })
    }
}

#[derive(Clone)]
/// High-level Catapult client.
///
/// Owns the credentials and transport through a single [`RestDriver`] and hands
/// out typed collection facades that share it. By default requests go to
/// `https://api.catapult.inetwork.com/v1`.
pub struct CatapultClient {
    driver: RestDriver,
}

impl CatapultClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`CatapultClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            driver: RestDriver::new(
                credentials,
                DEFAULT_ENDPOINT.to_owned(),
                DEFAULT_API_VERSION.to_owned(),
                Arc::new(ReqwestTransport {
                    client: reqwest::Client::new(),
                }),
            ),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> CatapultClientBuilder {
        CatapultClientBuilder::new(credentials)
    }

    /// Create a client from `CATAPULT_*` environment variables.
    ///
    /// `CATAPULT_ENDPOINT` is optional and overrides the default endpoint.
    pub fn from_env() -> Result<Self, CatapultError> {
        let mut builder = Self::builder(Credentials::from_env()?);
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            builder = builder.endpoint(endpoint);
        }
        builder.build()
    }

    /// The driver shared by every facade handed out by this client.
    pub fn driver(&self) -> &RestDriver {
        &self.driver
    }

    /// Scope raw calls to `parent_uri` (relative to the versioned endpoint, or absolute).
    pub fn resource(&self, parent_uri: impl Into<String>) -> ResourceClient {
        ResourceClient::new(self.driver.clone(), parent_uri)
    }

    pub fn applications(&self) -> Applications {
        Applications::new(self.driver.clone())
    }

    /// Messages of the authenticated user.
    pub fn messages(&self) -> Messages {
        Messages::new(self.driver.clone(), self.driver.user_path(USER_PATH))
    }

    pub fn available_numbers(&self) -> AvailableNumbers {
        AvailableNumbers::new(self.driver.clone())
    }

    pub fn account(&self) -> Account {
        Account::new(self.driver.clone())
    }
}
