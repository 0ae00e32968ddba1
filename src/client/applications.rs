use super::{
    APPLICATIONS_PATH, CatapultError, CreateBuilder, QueryBuilder, Record, ResourceClient,
    RestDriver,
};
use crate::domain::{Application, JsonObject};
use crate::transport;

/// Applications of the authenticated user (`users/{userId}/applications`).
#[derive(Debug, Clone)]
pub struct Applications {
    resource: ResourceClient,
}

impl Applications {
    pub fn new(driver: RestDriver) -> Self {
        let parent_uri = driver.user_path(APPLICATIONS_PATH);
        Self {
            resource: ResourceClient::new(driver, parent_uri),
        }
    }

    pub fn uri(&self) -> &str {
        self.resource.uri()
    }

    /// List applications, one page at a time.
    pub fn query(&self) -> QueryBuilder<Record<Application>> {
        QueryBuilder::new(self.resource.clone(), "", application_record)
    }

    pub async fn get(&self, id: &str) -> Result<Record<Application>, CatapultError> {
        let object = self.resource.get_object(id).await?;
        application_record(&self.resource, object)
    }

    /// Start describing a new application; nothing is sent until `create`.
    pub fn new_application(&self) -> CreateBuilder<Record<Application>> {
        CreateBuilder::new(self.resource.clone(), "", application_record)
    }
}

fn application_record(
    owner: &ResourceClient,
    object: JsonObject,
) -> Result<Record<Application>, CatapultError> {
    let application = transport::decode_application(object).map_err(CatapultError::parse)?;
    Ok(Record::new(owner.clone(), application))
}

impl QueryBuilder<Record<Application>> {
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    pub fn size(self, size: u32) -> Self {
        self.param("size", size)
    }
}

impl CreateBuilder<Record<Application>> {
    pub fn name(self, name: impl Into<String>) -> Self {
        self.field("name", name.into())
    }

    pub fn incoming_call_url(self, url: impl Into<String>) -> Self {
        self.field("incomingCallUrl", url.into())
    }

    /// Seconds to wait for the call callback before giving up.
    pub fn incoming_call_url_callback_timeout(self, seconds: u32) -> Self {
        self.field("incomingCallUrlCallbackTimeout", seconds)
    }

    pub fn incoming_sms_url(self, url: impl Into<String>) -> Self {
        self.field("incomingSmsUrl", url.into())
    }

    pub fn incoming_sms_url_callback_timeout(self, seconds: u32) -> Self {
        self.field("incomingSmsUrlCallbackTimeout", seconds)
    }

    /// `GET` or `POST`.
    pub fn callback_http_method(self, method: impl Into<String>) -> Self {
        self.field("callbackHttpMethod", method.into())
    }

    pub fn auto_answer(self, auto_answer: bool) -> Self {
        self.field("autoAnswer", auto_answer)
    }
}
