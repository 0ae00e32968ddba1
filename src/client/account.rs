use super::{ACCOUNT_PATH, CatapultError, QueryBuilder, ResourceClient, RestDriver};
use crate::domain::{AccountInfo, AccountTransaction, JsonObject};
use crate::transport;

/// Account of the authenticated user (`users/{userId}/account`).
#[derive(Debug, Clone)]
pub struct Account {
    resource: ResourceClient,
}

impl Account {
    pub fn new(driver: RestDriver) -> Self {
        let parent_uri = driver.user_path(ACCOUNT_PATH);
        Self {
            resource: ResourceClient::new(driver, parent_uri),
        }
    }

    pub fn uri(&self) -> &str {
        self.resource.uri()
    }

    /// Current balance and account type.
    pub async fn info(&self) -> Result<AccountInfo, CatapultError> {
        let object = self.resource.driver().request_account_info().await?;
        transport::decode_account_info(object).map_err(CatapultError::parse)
    }

    /// Charges and payments, newest first.
    pub fn transactions(&self) -> QueryBuilder<AccountTransaction> {
        QueryBuilder::new(self.resource.clone(), "transactions", account_transaction)
    }
}

fn account_transaction(
    _owner: &ResourceClient,
    object: JsonObject,
) -> Result<AccountTransaction, CatapultError> {
    transport::decode_account_transaction(object).map_err(CatapultError::parse)
}

impl QueryBuilder<AccountTransaction> {
    /// Upper bound on the number of transactions returned.
    pub fn max_items(self, max_items: u32) -> Self {
        self.param("maxItems", max_items)
    }

    /// `yyyy-MM-dd'T'HH:mm:ss'Z'`.
    pub fn from_date(self, date: impl Into<String>) -> Self {
        self.param("fromDate", date.into())
    }

    pub fn to_date(self, date: impl Into<String>) -> Self {
        self.param("toDate", date.into())
    }

    /// `charge`, `payment`, `credit` or `auto-recharge`.
    pub fn transaction_type(self, transaction_type: impl Into<String>) -> Self {
        self.param("type", transaction_type.into())
    }

    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    pub fn size(self, size: u32) -> Self {
        self.param("size", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, json_response, test_driver};

    const BASE: &str = "https://api.catapult.inetwork.com/v1/users/userId/account";

    #[tokio::test]
    async fn info_accepts_string_or_numeric_balance() {
        let transport = FakeTransport::new();
        transport.respond(json_response(
            200,
            r#"{"balance": "538.37250", "accountType": "pre-pay"}"#,
        ));
        transport.respond(json_response(200, r#"{"balance": 12.5}"#));
        let account = Account::new(test_driver(&transport));

        let info = account.info().await.unwrap();
        assert_eq!(info.balance.as_deref(), Some("538.37250"));
        assert_eq!(info.account_type.as_deref(), Some("pre-pay"));
        assert_eq!(transport.last_request().url, BASE);

        let info = account.info().await.unwrap();
        assert_eq!(info.balance.as_deref(), Some("12.5"));
        assert_eq!(info.account_type, None);
    }

    #[tokio::test]
    async fn transactions_query_is_encoded_in_order() {
        let transport = FakeTransport::new();
        transport.respond(json_response(
            200,
            r#"[{"id":"id1","time":"2013-02-21T13:39:09Z","amount":"0.00750","type":"charge","units":1,"productType":"sms-out","number":"+number"},{"id":"id2","time":"2013-02-21T13:37:42Z","amount":"0.00750","type":"charge","units":1,"productType":"sms-out","number":"+number"}]"#,
        ));
        let account = Account::new(test_driver(&transport));

        let transactions = account
            .transactions()
            .max_items(1000)
            .size(10)
            .list()
            .await
            .unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, "id1");
        assert_eq!(transactions[0].transaction_type.as_deref(), Some("charge"));
        assert_eq!(transactions[1].units, Some(1));
        assert_eq!(
            transport.last_request().url,
            format!("{BASE}/transactions?maxItems=1000&size=10")
        );
    }

    #[test]
    fn transaction_type_uses_wire_name() {
        let query = Account::new(test_driver(&FakeTransport::new()))
            .transactions()
            .from_date("2013-02-21T13:38:00Z")
            .to_date("2013-02-21T13:40:00Z")
            .transaction_type("charge")
            .page(2);
        let keys = query.params().keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["fromDate", "toDate", "type", "page"]);
    }
}
