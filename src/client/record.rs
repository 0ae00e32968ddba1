use std::ops::Deref;

use super::{CatapultError, ResourceClient};
use crate::domain::{Identified, Params, ValidationError};

/// A record together with the collection it was read from.
///
/// The collection handle is only used for calls scoped to this record
/// (`{collection}/{id}`); it never changes the client it came from.
#[derive(Debug, Clone)]
pub struct Record<T> {
    data: T,
    collection: ResourceClient,
}

impl<T> Record<T> {
    pub fn new(collection: ResourceClient, data: T) -> Self {
        Self { data, collection }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn collection(&self) -> &ResourceClient {
        &self.collection
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T: PartialEq> PartialEq for Record<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.collection.uri() == other.collection.uri()
    }
}

impl<T: Identified> Record<T> {
    fn require_id(&self) -> Result<String, CatapultError> {
        self.data
            .id()
            .map(str::to_owned)
            .ok_or(CatapultError::Validation(ValidationError::Empty { field: "id" }))
    }

    /// Delete the remote record, then forget its id.
    ///
    /// On failure the id is kept.
    pub async fn delete(&mut self) -> Result<(), CatapultError> {
        let id = self.require_id()?;
        self.collection.delete(&id).await?;
        self.data.clear_id();
        Ok(())
    }

    /// PUT `params` to the remote record. Local data is left as is.
    pub async fn update(&self, params: &Params) -> Result<(), CatapultError> {
        let id = self.require_id()?;
        self.collection.update(&id, params).await
    }
}
