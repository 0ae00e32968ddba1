use std::fmt;

use super::{CatapultError, RestDriver};
use crate::domain::{Created, JsonArray, JsonObject, Params};

#[derive(Clone)]
/// [`RestDriver`] bound to a parent URI such as `users/{userId}/applications`.
///
/// Relative paths resolve to `{parent}/{relative}`, or to the parent itself
/// when empty. Cloning is cheap and shares the driver.
pub struct ResourceClient {
    driver: RestDriver,
    parent_uri: String,
}

impl fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("parent_uri", &self.parent_uri)
            .finish_non_exhaustive()
    }
}

impl ResourceClient {
    pub fn new(driver: RestDriver, parent_uri: impl Into<String>) -> Self {
        Self {
            driver,
            parent_uri: parent_uri.into(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.parent_uri
    }

    pub fn driver(&self) -> &RestDriver {
        &self.driver
    }

    pub fn resolve(&self, relative: &str) -> String {
        let parent = self.parent_uri.trim_end_matches('/');
        let relative = relative.trim_matches('/');
        match (parent.is_empty(), relative.is_empty()) {
            (_, true) => parent.to_owned(),
            (true, false) => relative.to_owned(),
            (false, false) => format!("{parent}/{relative}"),
        }
    }

    /// Nested collection or record below this one.
    pub fn scope(&self, relative: &str) -> Self {
        Self::new(self.driver.clone(), self.resolve(relative))
    }

    pub async fn get_object(&self, relative: &str) -> Result<JsonObject, CatapultError> {
        self.driver
            .get_object(&self.resolve(relative), &Params::new())
            .await
    }

    pub async fn get_array(
        &self,
        relative: &str,
        params: &Params,
    ) -> Result<JsonArray, CatapultError> {
        self.driver.get_array(&self.resolve(relative), params).await
    }

    pub async fn create(&self, relative: &str, params: &Params) -> Result<Created, CatapultError> {
        self.driver.create(&self.resolve(relative), params).await
    }

    pub async fn update(&self, relative: &str, params: &Params) -> Result<(), CatapultError> {
        self.driver.update(&self.resolve(relative), params).await
    }

    pub async fn delete(&self, relative: &str) -> Result<(), CatapultError> {
        self.driver.delete(&self.resolve(relative)).await
    }
}
