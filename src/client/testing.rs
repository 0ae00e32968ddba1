//! Recording fake transport shared by the client tests.

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

use super::{BoxFuture, Credentials, HttpRequest, HttpResponse, HttpTransport, RestDriver};

#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug, Default)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    responses: VecDeque<HttpResponse>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned response; responses are served in FIFO order.
    pub fn respond(&self, response: HttpResponse) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.state
            .lock()
            .unwrap()
            .requests
            .last()
            .cloned()
            .expect("no request was recorded")
    }
}

impl HttpTransport for FakeTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request);
            state
                .responses
                .pop_front()
                .ok_or_else(|| "connection refused: no canned response".into())
        })
    }
}

pub fn json_response(status: u16, body: impl Into<String>) -> HttpResponse {
    HttpResponse {
        status,
        content_type: Some("application/json".to_owned()),
        location: None,
        body: body.into(),
    }
}

pub fn empty_response(status: u16) -> HttpResponse {
    HttpResponse {
        status,
        content_type: None,
        location: None,
        body: String::new(),
    }
}

/// Driver signed with `userId` / `token` / `secret` against the default endpoint.
pub fn test_driver(transport: &FakeTransport) -> RestDriver {
    RestDriver::new(
        Credentials::new("userId", "token", "secret").unwrap(),
        super::DEFAULT_ENDPOINT.to_owned(),
        super::DEFAULT_API_VERSION.to_owned(),
        Arc::new(transport.clone()),
    )
}
