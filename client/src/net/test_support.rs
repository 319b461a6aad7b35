//! Recording transport for driving the API client in unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport};

/// Replays queued responses in order and records every request sent.
/// An exhausted queue answers with a network error.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, error: ApiError) -> &Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_owned())))
    }
}
