use std::{cell::RefCell, collections::VecDeque};

use gloo_net::http::{Request, Response};

use crate::rest::SendRequest;

/// Records every request and answers with the queued responses in order. `None` and an empty
/// queue both simulate a lost connection.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub struct MockSendRequest {
    pub requests: RefCell<Vec<Request>>,
    pub responses: RefCell<VecDeque<Option<Result<Response, gloo_net::Error>>>>,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl MockSendRequest {
    pub fn new(responses: Vec<Option<Result<Response, gloo_net::Error>>>) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            responses: RefCell::new(responses.into()),
        }
    }

    pub fn requested_url(&self) -> Option<String> {
        self.requests.borrow().last().map(Request::url)
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl SendRequest for MockSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .flatten()
            .unwrap_or(Err(gloo_net::Error::GlooError("no response".to_string())))
    }
}
