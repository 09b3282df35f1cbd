//! A scripted in-memory transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use renamed::transport::{Transport, TransportError, TransportRequest, TransportResponse};
use renamed::{Backoff, Client};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Reply = Result<TransportResponse, TransportError>;

/// Replays queued replies in order and records every request it receives.
///
/// Once the queue is drained the last reply is repeated, so a single reply
/// scripts an endpoint that always answers the same way.
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    last: Mutex<Option<Reply>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        let next = self.replies.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(reply) => {
                *last = Some(reply.clone());
                reply
            }
            None => last
                .clone()
                .expect("MockTransport called with no scripted replies"),
        }
    }
}

pub fn json(status: u16, body: serde_json::Value) -> Reply {
    Ok(TransportResponse::new(
        StatusCode::from_u16(status).unwrap(),
        HeaderMap::new(),
        body.to_string(),
    ))
}

pub fn text(status: u16, body: &str) -> Reply {
    Ok(TransportResponse::new(
        StatusCode::from_u16(status).unwrap(),
        HeaderMap::new(),
        body,
    ))
}

pub fn connection_refused() -> Reply {
    Err(TransportError::Connection("connection refused".to_string()))
}

/// A client wired to `transport` that retries without waiting.
pub fn client_with(transport: Arc<MockTransport>, max_retries: usize) -> Client {
    Client::builder()
        .api_key("rt_test123")
        .base_url("https://api.example.com/v1")
        .unwrap()
        .max_retries(max_retries)
        .backoff(Backoff::none())
        .transport(transport)
        .build()
        .unwrap()
}
