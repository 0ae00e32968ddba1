use serde_json::Value;

use super::{CatapultError, ResourceClient};
use crate::domain::{Created, JsonObject, Params};
use crate::transport;

/// Maps one JSON object to a record, given the collection it was read from.
pub type RecordFactory<T> = fn(&ResourceClient, JsonObject) -> Result<T, CatapultError>;

/// Accumulates filter parameters for a collection and lists matching records.
///
/// Setters consume and return the builder. [`QueryBuilder::list`] may be
/// called repeatedly; every call issues a fresh request.
pub struct QueryBuilder<T> {
    resource: ResourceClient,
    path: String,
    params: Params,
    factory: RecordFactory<T>,
}

impl<T> Clone for QueryBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            path: self.path.clone(),
            params: self.params.clone(),
            factory: self.factory,
        }
    }
}

impl<T> std::fmt::Debug for QueryBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("resource", &self.resource)
            .field("path", &self.path)
            .field("params", &self.params)
            .finish()
    }
}

impl<T> QueryBuilder<T> {
    pub fn new(resource: ResourceClient, path: impl Into<String>, factory: RecordFactory<T>) -> Self {
        Self {
            resource,
            path: path.into(),
            params: Params::new(),
            factory,
        }
    }

    /// Set an arbitrary query parameter; a repeated key keeps its first position.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Fetch the collection and map every element, in server order.
    pub async fn list(&self) -> Result<Vec<T>, CatapultError> {
        let scope = self.resource.scope(&self.path);
        let array = self.resource.get_array(&self.path, &self.params).await?;
        array
            .into_iter()
            .map(|value| {
                let object = transport::expect_object(value).map_err(CatapultError::parse)?;
                (self.factory)(&scope, object)
            })
            .collect()
    }
}

/// Accumulates the fields of a new record and creates it.
pub struct CreateBuilder<T> {
    resource: ResourceClient,
    path: String,
    params: Params,
    factory: RecordFactory<T>,
}

impl<T> Clone for CreateBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            path: self.path.clone(),
            params: self.params.clone(),
            factory: self.factory,
        }
    }
}

impl<T> std::fmt::Debug for CreateBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateBuilder")
            .field("resource", &self.resource)
            .field("path", &self.path)
            .field("params", &self.params)
            .finish()
    }
}

impl<T> CreateBuilder<T> {
    pub fn new(resource: ResourceClient, path: impl Into<String>, factory: RecordFactory<T>) -> Self {
        Self {
            resource,
            path: path.into(),
            params: Params::new(),
            factory,
        }
    }

    /// Set an arbitrary field of the JSON body.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn fields(&self) -> &Params {
        &self.params
    }

    /// POST the accumulated fields and map the created record.
    ///
    /// Missing required fields are left for the server to reject. When the
    /// server answers with a `Location` header only, the record is fetched
    /// from that location; a location on another origin is a parse error.
    pub async fn create(&self) -> Result<T, CatapultError> {
        let scope = self.resource.scope(&self.path);
        let object = match self.resource.create(&self.path, &self.params).await? {
            Created::Resource(object) => object,
            Created::Location { location, .. } => {
                scope.driver().get_object(&location, &Params::new()).await?
            }
        };
        (self.factory)(&scope, object)
    }
}
