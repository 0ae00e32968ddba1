/// Records that carry a server-assigned identifier.
///
/// Handles use this to address follow-up calls and to forget the identifier
/// once the remote record is gone.
pub trait Identified {
    fn id(&self) -> Option<&str>;
    fn clear_id(&mut self);
}

/// Application: the callback configuration incoming calls and messages are
/// routed through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Application {
    pub id: Option<String>,
    pub name: Option<String>,
    pub incoming_call_url: Option<String>,
    pub incoming_sms_url: Option<String>,
    pub callback_http_method: Option<String>,
    pub auto_answer: bool,
}

impl Identified for Application {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}

/// SMS/MMS message, inbound or outbound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub id: Option<String>,
    pub message_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub text: Option<String>,
    pub time: Option<String>,
    pub direction: Option<String>,
    pub state: Option<String>,
    pub tag: Option<String>,
    pub media: Vec<String>,
}

/// Phone number returned by an available-numbers search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableNumber {
    /// E.164 number, e.g. `+19195551212`.
    pub number: String,
    pub national_number: Option<String>,
    pub city: Option<String>,
    pub rate_center: Option<String>,
    pub state: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountInfo {
    /// Balance as sent by the server (string form is preserved).
    pub balance: Option<String>,
    pub account_type: Option<String>,
}

/// One charge or payment on the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountTransaction {
    pub id: String,
    pub time: Option<String>,
    pub amount: Option<String>,
    /// Wire field `type` (`charge`, `payment`, ...).
    pub transaction_type: Option<String>,
    pub units: Option<u64>,
    pub product_type: Option<String>,
    pub number: Option<String>,
}
