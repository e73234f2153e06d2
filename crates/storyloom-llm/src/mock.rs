//! Scripted transport for deterministic testing
//!
//! Returns queued outcomes in order, then falls back to a default outcome.
//! Clones share the same script, call count and request log, so a test can
//! keep a handle after moving the transport into a client.

use crate::gemini::GenerateContentRequest;
use crate::transport::{Transport, TransportResponse};
use crate::LlmError;
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Outcome {
    Response(TransportResponse),
    NetworkError(String),
}

impl Outcome {
    fn into_result(self) -> Result<TransportResponse, LlmError> {
        match self {
            Outcome::Response(r) => Ok(r),
            Outcome::NetworkError(msg) => Err(LlmError::network(msg)),
        }
    }
}

/// Mock transport with a scripted sequence of outcomes
///
/// # Examples
///
/// ```
/// use storyloom_llm::MockTransport;
///
/// // Two rate-limit responses, then the default success
/// let transport = MockTransport::with_text("done");
/// transport.push_response(429, "rate limited");
/// transport.push_response(429, "rate limited");
/// assert_eq!(transport.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Outcome>>>,
    fallback: Outcome,
    requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
}

impl MockTransport {
    /// A transport whose default answer is an empty success envelope
    pub fn new() -> Self {
        Self::with_fallback(Outcome::Response(TransportResponse::new(200, "{}")))
    }

    /// A transport whose default answer is a success carrying `text`
    pub fn with_text(text: impl AsRef<str>) -> Self {
        Self::with_fallback(Outcome::Response(TransportResponse::new(
            200,
            Self::success_body(text.as_ref()),
        )))
    }

    /// A transport that always answers with `status`
    pub fn always_status(status: u16, body: impl Into<String>) -> Self {
        Self::with_fallback(Outcome::Response(TransportResponse::new(status, body)))
    }

    /// A transport that always fails at the connection level
    pub fn always_unreachable() -> Self {
        Self::with_fallback(Outcome::NetworkError("connection refused".to_string()))
    }

    fn with_fallback(fallback: Outcome) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a raw HTTP response
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Outcome::Response(TransportResponse::new(status, body)));
    }

    /// Queue a successful response carrying `text`
    pub fn push_text(&self, text: &str) {
        self.push_response(200, Self::success_body(text));
    }

    /// Queue a connection-level failure
    pub fn push_network_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Outcome::NetworkError(message.into()));
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request body received, oldest first
    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request body
    pub fn last_request(&self) -> Option<GenerateContentRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// A generateContent envelope whose first candidate carries `text`
    pub fn success_body(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    /// Like [`success_body`](Self::success_body) with web grounding attributions
    pub fn grounded_body(text: &str, sources: &[(&str, &str)]) -> String {
        let attributions: Vec<_> = sources
            .iter()
            .map(|(uri, title)| json!({ "web": { "uri": uri, "title": title } }))
            .collect();
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "groundingMetadata": { "groundingAttributions": attributions }
            }]
        })
        .to_string()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &GenerateContentRequest) -> Result<TransportResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());

        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone()).into_result()
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PromptRequest;

    fn body() -> GenerateContentRequest {
        GenerateContentRequest::from_prompt(&PromptRequest::new("test prompt"))
    }

    #[tokio::test]
    async fn test_script_then_fallback() {
        let transport = MockTransport::with_text("default");
        transport.push_response(429, "slow down");

        let first = transport.send(&body()).await.unwrap();
        assert_eq!(first.status, 429);

        let second = transport.send(&body()).await.unwrap();
        assert_eq!(second.status, 200);
        assert!(second.body.contains("default"));

        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_network_error() {
        let transport = MockTransport::always_unreachable();
        let result = transport.send(&body()).await;
        assert!(matches!(result, Err(LlmError::Transient { status: None, .. })));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let transport1 = MockTransport::new();
        let transport2 = transport1.clone();

        transport1.send(&body()).await.unwrap();

        assert_eq!(transport1.call_count(), 1);
        assert_eq!(transport2.call_count(), 1);
        assert_eq!(transport2.last_request().unwrap().contents[0].parts[0].text, "test prompt");
    }
}
