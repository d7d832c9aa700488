//! Scripted transport for tests.
//!
//! Replays queued responses in order and records every request it sees,
//! so callers can assert on what would have gone over the wire.

use super::{ApiRequest, HttpTransport, RawResponse, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(self, status: u16, body: serde_json::Value) -> Self {
        self.push(Ok(RawResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string().into_bytes(),
        }))
    }

    pub fn respond_bytes(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.push(Ok(RawResponse {
            status,
            content_type: None,
            body: body.into(),
        }))
    }

    /// Fail the next call as if the connection could not be made.
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Err(TransportError::Other(message.into())))
    }

    /// Fail the next call after the status line, while reading the body.
    pub fn fail_body(self, message: impl Into<String>) -> Self {
        let message: String = message.into();
        self.push(Err(TransportError::Body(message.into())))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn push(self, response: Result<RawResponse, TransportError>) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        next.unwrap_or_else(|| {
            Err(TransportError::Other(
                "mock transport has no response queued".to_string(),
            ))
        })
    }
}
