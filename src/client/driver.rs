use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::{CatapultError, Credentials, HttpRequest, HttpResponse, HttpTransport, ResourceClient};
use crate::domain::{Created, HttpMethod, JsonArray, JsonObject, Params, ParsedResult, UserId};
use crate::transport::{self, TransportError};

pub const USER_PATH: &str = "users/%s";
pub const ACCOUNT_PATH: &str = "users/%s/account";
pub const ACCOUNT_TRANSACTIONS_PATH: &str = "users/%s/account/transactions";
pub const APPLICATIONS_PATH: &str = "users/%s/applications";
pub const LOCAL_AVAILABLE_NUMBERS_PATH: &str = "availableNumbers/local";
pub const TOLL_FREE_AVAILABLE_NUMBERS_PATH: &str = "availableNumbers/tollFree";

#[derive(Clone)]
/// Signs, encodes, sends and decodes REST calls.
///
/// Paths are either relative to `{endpoint}/{api_version}` or absolute URLs.
/// Every call reaches the transport exactly once: there is no retry, caching
/// or redirect handling beyond what the transport does itself.
pub struct RestDriver {
    credentials: Arc<Credentials>,
    endpoint: String,
    api_version: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for RestDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestDriver")
            .field("user_id", self.credentials.user_id())
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl RestDriver {
    pub fn new(
        credentials: Credentials,
        endpoint: String,
        api_version: String,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            endpoint,
            api_version,
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn user_id(&self) -> &UserId {
        self.credentials.user_id()
    }

    /// Expand a `%s` path template with the authenticated user id.
    pub fn user_path(&self, template: &str) -> String {
        transport::expand_path(template, &[self.user_id().as_str()])
    }

    /// Scope this driver to `parent_uri`.
    pub fn resource(&self, parent_uri: impl Into<String>) -> ResourceClient {
        ResourceClient::new(self.clone(), parent_uri)
    }

    /// Build the request for `method` without sending it.
    ///
    /// Every request carries `Accept`, `Accept-Charset` and a signed
    /// `Authorization` header. GET/DELETE encode `params` into the query
    /// string; POST/PUT send them as a JSON object body.
    pub fn setup_request(
        &self,
        path: &str,
        method: HttpMethod,
        params: &Params,
    ) -> Result<HttpRequest, CatapultError> {
        let query = (!method.carries_body()).then_some(params);
        let url = transport::build_url(&self.endpoint, &self.api_version, path, query)?;

        let mut headers = vec![
            ("Accept".to_owned(), "application/json".to_owned()),
            ("Accept-Charset".to_owned(), "utf-8".to_owned()),
            ("Authorization".to_owned(), self.credentials.authorization()),
        ];

        let body = if method.carries_body() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
            Some(serde_json::to_string(params).map_err(CatapultError::Encode)?)
        } else {
            None
        };

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    /// Send a request and decode whatever the server returned.
    #[instrument(level = "debug", skip(self, params))]
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
    ) -> Result<ParsedResult, CatapultError> {
        let response = self.send(method, path, params).await?;
        transport::decode_parsed(response.content_type.as_deref(), &response.body)
            .map_err(CatapultError::parse)
    }

    /// GET `path`, expecting a single JSON object.
    #[instrument(level = "debug", skip(self, params))]
    pub async fn get_object(&self, path: &str, params: &Params) -> Result<JsonObject, CatapultError> {
        let response = self.send(HttpMethod::Get, path, params).await?;
        transport::decode_object(response.content_type.as_deref(), &response.body)
            .map_err(CatapultError::parse)
    }

    /// GET `path`, expecting a JSON array.
    #[instrument(level = "debug", skip(self, params))]
    pub async fn get_array(&self, path: &str, params: &Params) -> Result<JsonArray, CatapultError> {
        let response = self.send(HttpMethod::Get, path, params).await?;
        transport::decode_array(response.content_type.as_deref(), &response.body)
            .map_err(CatapultError::parse)
    }

    /// POST `params` as JSON to `path`.
    ///
    /// Returns the echoed resource when the server sends a JSON object, or the
    /// `Location` header and the id taken from it when the body is empty.
    /// The location is resolved against the POST URL and must stay on the
    /// endpoint's origin.
    #[instrument(level = "debug", skip(self, params))]
    pub async fn create(&self, path: &str, params: &Params) -> Result<Created, CatapultError> {
        let response = self.send(HttpMethod::Post, path, params).await?;
        let parsed = transport::decode_parsed(response.content_type.as_deref(), &response.body)
            .map_err(CatapultError::parse)?;

        match parsed {
            ParsedResult::Object(object) => Ok(Created::Resource(object)),
            ParsedResult::Array(_) => Err(CatapultError::parse(TransportError::UnexpectedShape {
                expected: "object",
                found: "array",
            })),
            ParsedResult::Text(_) | ParsedResult::Empty => {
                let header = response
                    .location
                    .ok_or_else(|| CatapultError::parse(TransportError::MissingLocation))?;
                let request_url =
                    transport::build_url(&self.endpoint, &self.api_version, path, None)?;
                let location = transport::resolve_location(&self.endpoint, &request_url, &header)
                    .map_err(CatapultError::parse)?;
                let id = transport::id_from_location(location.path())
                    .ok_or_else(|| CatapultError::parse(TransportError::MissingLocation))?;
                Ok(Created::Location {
                    location: location.into(),
                    id,
                })
            }
        }
    }

    /// PUT `params` as JSON to `path`; the response body is ignored.
    #[instrument(level = "debug", skip(self, params))]
    pub async fn update(&self, path: &str, params: &Params) -> Result<(), CatapultError> {
        self.send(HttpMethod::Put, path, params).await?;
        Ok(())
    }

    /// DELETE `path`; any 2xx is success and the body is ignored.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, path: &str) -> Result<(), CatapultError> {
        self.send(HttpMethod::Delete, path, &Params::new()).await?;
        Ok(())
    }

    pub async fn request_account_info(&self) -> Result<JsonObject, CatapultError> {
        self.get_object(&self.user_path(ACCOUNT_PATH), &Params::new())
            .await
    }

    pub async fn request_account_transactions(
        &self,
        params: &Params,
    ) -> Result<JsonArray, CatapultError> {
        self.get_array(&self.user_path(ACCOUNT_TRANSACTIONS_PATH), params)
            .await
    }

    pub async fn request_applications(&self, params: &Params) -> Result<JsonArray, CatapultError> {
        self.get_array(&self.user_path(APPLICATIONS_PATH), params)
            .await
    }

    pub async fn request_local_available_numbers(
        &self,
        params: &Params,
    ) -> Result<JsonArray, CatapultError> {
        self.get_array(LOCAL_AVAILABLE_NUMBERS_PATH, params).await
    }

    pub async fn request_toll_free_available_numbers(
        &self,
        params: &Params,
    ) -> Result<JsonArray, CatapultError> {
        self.get_array(TOLL_FREE_AVAILABLE_NUMBERS_PATH, params)
            .await
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
    ) -> Result<HttpResponse, CatapultError> {
        let request = self.setup_request(path, method, params)?;
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(CatapultError::Transport)?;
        debug!(status = response.status, "response received");

        if !(200..=299).contains(&response.status) {
            let (message, code) = transport::decode_error_fields(&response.body);
            warn!(status = response.status, message = ?message, "request failed");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(CatapultError::Rest {
                status: response.status,
                message,
                code,
                body,
            });
        }

        Ok(response)
    }
}
