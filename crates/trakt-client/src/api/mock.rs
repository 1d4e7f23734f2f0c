//! Scripted transport for endpoint tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::TraktClient;
use crate::config::ClientConfig;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use crate::{Token, TraktError};

enum Reply {
    Response(ApiResponse),
    Fail(String),
}

/// Replays queued replies in order and records every request it receives.
#[derive(Default)]
pub(crate) struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, status: u16, body: &str) -> Self {
        self.push(Reply::Response(ApiResponse {
            status,
            body: body.to_string(),
        }))
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.push(Reply::Fail(message.to_string()))
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TraktError> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Response(resp)) => Ok(resp),
            Some(Reply::Fail(message)) => Err(TraktError::Transport(message)),
            None => Err(TraktError::Transport("no scripted reply".into())),
        }
    }
}

pub(crate) fn valid_token() -> Token {
    Token {
        access_token: "test-token".into(),
        refresh_token: "refresh".into(),
        scope: "public".into(),
        expires_at: Utc::now().timestamp() + 7200,
    }
}

/// Client with a valid bearer token over the given mock.
pub(crate) fn authed(transport: MockTransport) -> TraktClient<MockTransport> {
    TraktClient::with_transport(
        ClientConfig::new("test-client"),
        Arc::new(valid_token()),
        transport,
    )
    .unwrap()
}
