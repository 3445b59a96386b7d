//! Mock implementations for testing.
//!
//! This module provides a queue-based mock transport for testing the
//! document-chat client in isolation. It is a regular public module so
//! integration tests under `tests/` can use it too.

use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream;

use crate::transport::{
    ChunkedStream, HttpRequest, HttpResponse, HttpTransport, TransportError,
};

/// One enqueued streaming reply: either a stream of items (each possibly a
/// mid-stream error) or a failure before any chunk is produced.
type StreamingReply = Result<Vec<Result<Bytes, TransportError>>, TransportError>;

/// Mock HTTP transport for testing.
///
/// Tests enqueue responses ahead of time and verify the requests that were
/// made. Supports buffered responses, streaming responses, mid-stream
/// errors, and pre-stream failures.
///
/// # Example
///
/// ```rust
/// use docchat_client::mocks::MockHttpTransport;
/// use bytes::Bytes;
///
/// let transport = MockHttpTransport::new();
/// transport.enqueue_streaming_response(vec![
///     Bytes::from_static(b"Hello "),
///     Bytes::from_static(b"world"),
/// ]);
/// ```
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    streaming_responses: Arc<Mutex<VecDeque<StreamingReply>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            streaming_responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Enqueue a buffered response for the next `send` call.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        let mut headers = std::collections::HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        self.enqueue_response(Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        }));
    }

    /// Enqueue a transport error for the next `send` call.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Enqueue a streaming response whose chunks all arrive successfully.
    pub fn enqueue_streaming_response(&self, chunks: Vec<Bytes>) {
        self.streaming_responses
            .lock()
            .unwrap()
            .push_back(Ok(chunks.into_iter().map(Ok).collect()));
    }

    /// Enqueue a streaming response item by item, allowing mid-stream
    /// errors.
    pub fn enqueue_streaming_items(&self, items: Vec<Result<Bytes, TransportError>>) {
        self.streaming_responses.lock().unwrap().push_back(Ok(items));
    }

    /// Enqueue a failure for the next `send_streaming` call, before any
    /// chunk is produced (e.g. a non-success status).
    pub fn enqueue_streaming_error(&self, error: TransportError) {
        self.streaming_responses.lock().unwrap().push_back(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.requests.lock().unwrap().len();
        assert_eq!(
            actual, expected,
            "Expected {} requests, got {}",
            expected, actual
        );
    }

    fn record_request(&self, request: &HttpRequest) {
        self.requests.lock().unwrap().push(request.clone());
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.record_request(&request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request(format!(
                    "No mock response enqueued for {}",
                    request.url
                )))
            })
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<ChunkedStream, TransportError> {
        self.record_request(&request);

        let reply = self
            .streaming_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request(format!(
                    "No mock streaming response enqueued for {}",
                    request.url
                )))
            });

        let items = reply?;
        Ok(Box::pin(stream::iter(items)))
    }
}
