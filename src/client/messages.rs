use serde_json::Value;

use super::{CatapultError, CreateBuilder, QueryBuilder, ResourceClient, RestDriver};
use crate::domain::{JsonObject, Message};
use crate::transport;

/// Messages below a parent resource (`{parent}/messages`).
#[derive(Debug, Clone)]
pub struct Messages {
    resource: ResourceClient,
}

impl Messages {
    pub fn new(driver: RestDriver, parent_uri: impl Into<String>) -> Self {
        Self {
            resource: ResourceClient::new(driver, parent_uri).scope("messages"),
        }
    }

    pub fn uri(&self) -> &str {
        self.resource.uri()
    }

    pub fn query(&self) -> QueryBuilder<Message> {
        QueryBuilder::new(self.resource.clone(), "", message)
    }

    pub async fn get(&self, id: &str) -> Result<Message, CatapultError> {
        let object = self.resource.get_object(id).await?;
        message(&self.resource, object)
    }

    /// Start composing an outbound message; nothing is sent until `create`.
    pub fn new_message(&self) -> CreateBuilder<Message> {
        CreateBuilder::new(self.resource.clone(), "", message)
    }
}

fn message(_owner: &ResourceClient, object: JsonObject) -> Result<Message, CatapultError> {
    transport::decode_message(object).map_err(CatapultError::parse)
}

impl QueryBuilder<Message> {
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    pub fn size(self, size: u32) -> Self {
        self.param("size", size)
    }

    pub fn from(self, number: impl Into<String>) -> Self {
        self.param("from", number.into())
    }

    pub fn to(self, number: impl Into<String>) -> Self {
        self.param("to", number.into())
    }

    /// Lower time bound, `yyyy-MM-dd'T'HH:mm:ss'Z'`.
    pub fn from_date(self, date: impl Into<String>) -> Self {
        self.param("fromDate", date.into())
    }

    pub fn to_date(self, date: impl Into<String>) -> Self {
        self.param("toDate", date.into())
    }

    /// `asc` or `desc`.
    pub fn sort_order(self, order: impl Into<String>) -> Self {
        self.param("sortOrder", order.into())
    }
}

impl CreateBuilder<Message> {
    pub fn from(self, number: impl Into<String>) -> Self {
        self.field("from", number.into())
    }

    pub fn to(self, number: impl Into<String>) -> Self {
        self.field("to", number.into())
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.field("text", text.into())
    }

    pub fn tag(self, tag: impl Into<String>) -> Self {
        self.field("tag", tag.into())
    }

    /// Media URLs attached to the message (MMS).
    pub fn media<I, S>(self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls = urls
            .into_iter()
            .map(|url| Value::String(url.into()))
            .collect::<Vec<_>>();
        self.field("media", urls)
    }

    pub fn callback_url(self, url: impl Into<String>) -> Self {
        self.field("callbackUrl", url.into())
    }

    /// Delivery receipt mode: `none`, `all` or `error`.
    pub fn receipt_requested(self, mode: impl Into<String>) -> Self {
        self.field("receiptRequested", mode.into())
    }
}
