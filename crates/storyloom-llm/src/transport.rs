//! Transport seam between the structured client and the network

use crate::gemini::GenerateContentRequest;
use crate::LlmError;
use async_trait::async_trait;

/// Raw HTTP outcome of one generateContent call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Build a response from status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one serialized request and returns the raw response
///
/// Implementations report connection-level problems (timeouts, refused
/// connections) as [`LlmError::Transient`]. Status-code classification and
/// retries belong to [`StructuredClient`](crate::StructuredClient).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single call
    async fn send(&self, request: &GenerateContentRequest) -> Result<TransportResponse, LlmError>;

    /// Model name, for logging
    fn model_name(&self) -> &str;
}
