use serde::Deserialize;
use serde_json::Value;

use super::TransportError;
use super::money::TransportMoney;
use crate::domain::{
    AccountInfo, AccountTransaction, Application, AvailableNumber, JsonObject, Message,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationJson {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    incoming_call_url: Option<String>,
    #[serde(default)]
    incoming_sms_url: Option<String>,
    #[serde(default)]
    callback_http_method: Option<String>,
    #[serde(default)]
    auto_answer: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageJson {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    media: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailableNumberJson {
    number: String,
    #[serde(default)]
    national_number: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    rate_center: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    price: Option<TransportMoney>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountInfoJson {
    #[serde(default)]
    balance: Option<TransportMoney>,
    #[serde(default)]
    account_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountTransactionJson {
    id: String,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    amount: Option<TransportMoney>,
    #[serde(default, rename = "type")]
    transaction_type: Option<String>,
    #[serde(default)]
    units: Option<TransportCount>,
    #[serde(default)]
    product_type: Option<String>,
    #[serde(default)]
    number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportCount {
    Int(u64),
    String(String),
}

impl TransportCount {
    fn into_u64(self) -> Option<u64> {
        match self {
            Self::Int(value) => Some(value),
            Self::String(value) => value.trim().parse::<u64>().ok(),
        }
    }
}

pub fn decode_application(object: JsonObject) -> Result<Application, TransportError> {
    let parsed: ApplicationJson = serde_json::from_value(Value::Object(object))?;
    Ok(Application {
        id: parsed.id,
        name: parsed.name,
        incoming_call_url: parsed.incoming_call_url,
        incoming_sms_url: parsed.incoming_sms_url,
        callback_http_method: parsed.callback_http_method,
        auto_answer: parsed.auto_answer,
    })
}

pub fn decode_message(object: JsonObject) -> Result<Message, TransportError> {
    let parsed: MessageJson = serde_json::from_value(Value::Object(object))?;
    Ok(Message {
        id: parsed.id,
        message_id: parsed.message_id,
        from: parsed.from,
        to: parsed.to,
        text: parsed.text,
        time: parsed.time,
        direction: parsed.direction,
        state: parsed.state,
        tag: parsed.tag,
        media: parsed.media.unwrap_or_default(),
    })
}

pub fn decode_available_number(object: JsonObject) -> Result<AvailableNumber, TransportError> {
    let parsed: AvailableNumberJson = serde_json::from_value(Value::Object(object))?;
    Ok(AvailableNumber {
        number: parsed.number,
        national_number: parsed.national_number,
        city: parsed.city,
        rate_center: parsed.rate_center,
        state: parsed.state,
        price: parsed.price.map(TransportMoney::into_string),
    })
}

pub fn decode_account_info(object: JsonObject) -> Result<AccountInfo, TransportError> {
    let parsed: AccountInfoJson = serde_json::from_value(Value::Object(object))?;
    Ok(AccountInfo {
        balance: parsed.balance.map(TransportMoney::into_string),
        account_type: parsed.account_type,
    })
}

pub fn decode_account_transaction(
    object: JsonObject,
) -> Result<AccountTransaction, TransportError> {
    let parsed: AccountTransactionJson = serde_json::from_value(Value::Object(object))?;
    Ok(AccountTransaction {
        id: parsed.id,
        time: parsed.time,
        amount: parsed.amount.map(TransportMoney::into_string),
        transaction_type: parsed.transaction_type,
        units: parsed.units.and_then(TransportCount::into_u64),
        product_type: parsed.product_type,
        number: parsed.number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decode_application_maps_payload() {
        let json = r#"
        {
          "id": "id1",
          "autoAnswer": true,
          "incomingSmsUrl": "http:\/\/sms\/callback.json",
          "name": "App1",
          "incomingCallUrl": "http:\/\/call\/callback.json"
        }
        "#;

        let app = decode_application(object(json)).unwrap();
        assert_eq!(app.id.as_deref(), Some("id1"));
        assert_eq!(app.name.as_deref(), Some("App1"));
        assert_eq!(app.incoming_call_url.as_deref(), Some("http://call/callback.json"));
        assert_eq!(app.incoming_sms_url.as_deref(), Some("http://sms/callback.json"));
        assert!(app.auto_answer);
    }

    #[test]
    fn decode_application_defaults_missing_fields() {
        let app = decode_application(object(r#"{"id":"id2"}"#)).unwrap();
        assert_eq!(app.name, None);
        assert!(!app.auto_answer);
    }

    #[test]
    fn decode_message_maps_payload() {
        let json = r#"
        {
          "to": "+number1",
          "id": "m-ckobmmd4fgqumyhssgd6lqy",
          "time": "2013-10-02T12:15:41Z",
          "text": "Hello judith",
          "direction": "in",
          "state": "received",
          "from": "+number2",
          "messageId": "m-ckobmmd4fgqumyhssgd6lqy",
          "media": []
        }
        "#;

        let message = decode_message(object(json)).unwrap();
        assert_eq!(message.id.as_deref(), Some("m-ckobmmd4fgqumyhssgd6lqy"));
        assert_eq!(message.from.as_deref(), Some("+number2"));
        assert_eq!(message.to.as_deref(), Some("+number1"));
        assert_eq!(message.direction.as_deref(), Some("in"));
        assert!(message.media.is_empty());
        assert_eq!(message.tag, None);
    }

    #[test]
    fn decode_message_treats_null_media_as_empty() {
        let message = decode_message(object(r#"{"id":"m-1","media":null}"#)).unwrap();
        assert_eq!(message.id.as_deref(), Some("m-1"));
        assert!(message.media.is_empty());

        let message = decode_message(object(r#"{"media":["https://a/1.png"]}"#)).unwrap();
        assert_eq!(message.media, vec!["https://a/1.png".to_owned()]);
    }

    #[test]
    fn decode_available_number_maps_payload() {
        let json = r#"
        {
          "price": "0.00",
          "state": "CA",
          "number": "num",
          "nationalNumber": "nationalNum",
          "rateCenter": "rCenter",
          "city": "ci"
        }
        "#;

        let number = decode_available_number(object(json)).unwrap();
        assert_eq!(number.number, "num");
        assert_eq!(number.national_number.as_deref(), Some("nationalNum"));
        assert_eq!(number.city.as_deref(), Some("ci"));
        assert_eq!(number.state.as_deref(), Some("CA"));
        assert_eq!(number.rate_center.as_deref(), Some("rCenter"));
        assert_eq!(number.price.as_deref(), Some("0.00"));
    }

    #[test]
    fn decode_available_number_requires_number() {
        let err = decode_available_number(object(r#"{"price":"0.00"}"#)).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_account_info_keeps_balance_text() {
        let info =
            decode_account_info(object(r#"{"balance": "538.37250", "accountType": "pre-pay"}"#))
                .unwrap();
        assert_eq!(info.balance.as_deref(), Some("538.37250"));
        assert_eq!(info.account_type.as_deref(), Some("pre-pay"));
    }

    #[test]
    fn decode_account_transaction_supports_numeric_or_string_units() {
        let json = r#"
        {
          "id": "id1",
          "time": "2014-08-05T22:32:44Z",
          "amount": "0.00",
          "type": "charge",
          "units": 1,
          "productType": "call-in",
          "number": "+number1"
        }
        "#;
        let tx = decode_account_transaction(object(json)).unwrap();
        assert_eq!(tx.id, "id1");
        assert_eq!(tx.transaction_type.as_deref(), Some("charge"));
        assert_eq!(tx.units, Some(1));
        assert_eq!(tx.product_type.as_deref(), Some("call-in"));
        assert_eq!(tx.amount.as_deref(), Some("0.00"));

        let tx = decode_account_transaction(object(r#"{"id":"id2","units":"3"}"#)).unwrap();
        assert_eq!(tx.units, Some(3));
    }
}
