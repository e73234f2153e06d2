//! Storyloom LLM Client Layer
//!
//! A single structured client for the generative-text backend, shared by every
//! adapter in the workspace.
//!
//! # Architecture
//!
//! ```text
//! PromptRequest → StructuredClient → (retry/backoff) → Transport → generateContent
//!                        ↓
//!             StructuredResult (JSON validated against Schema, or raw text)
//! ```
//!
//! # Transports
//!
//! - `GeminiTransport`: reqwest-based HTTP transport for the generateContent API
//! - `MockTransport`: scripted transport for deterministic testing
//!
//! # Examples
//!
//! ```
//! use storyloom_llm::{MockTransport, PromptRequest, RetryPolicy, StructuredClient, StructuredResult};
//!
//! # tokio_test_block_on(async {
//! let transport = MockTransport::with_text("Once upon a time");
//! let client = StructuredClient::new(transport, RetryPolicy::default());
//!
//! let result = client.execute(&PromptRequest::new("Begin a story")).await.unwrap();
//! assert_eq!(result, StructuredResult::Text("Once upon a time".to_string()));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod gemini;
pub mod mock;
pub mod request;
pub mod retry;
pub mod schema;
pub mod transport;

use thiserror::Error;

pub use client::{Generation, GroundingSource, StructuredClient, StructuredResult};
pub use gemini::{GeminiConfig, GeminiTransport};
pub use mock::MockTransport;
pub use request::PromptRequest;
pub use retry::RetryPolicy;
pub use schema::{Field, Schema, SchemaKind};
pub use transport::{Transport, TransportResponse};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Timeout, connection failure, HTTP 408/429 or 5xx; worth retrying
    #[error("Transient failure: {message}")]
    Transient {
        /// HTTP status, if the failure came with one
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// Missing or invalid client configuration (e.g. no API key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The backend answered but the payload did not have the requested shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The backend refused the request (bad request, auth failure, unknown model)
    #[error("Request rejected (HTTP {status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body or description
        message: String,
    },

    /// Every attempt failed transiently
    #[error("Retries exhausted after {attempts} attempts: {last}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// The last transient failure
        #[source]
        last: Box<LlmError>,
    },
}

impl LlmError {
    /// Whether the failure is transient and the request may be retried
    pub fn is_retryable(&self) -> bool {
        matches!(self, LlmError::Transient { .. })
    }

    /// Shorthand for a transient failure without an HTTP status
    pub fn network(message: impl Into<String>) -> Self {
        LlmError::Transient {
            status: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transient_is_retryable() {
        assert!(LlmError::network("connection reset").is_retryable());
        assert!(LlmError::Transient {
            status: Some(429),
            message: "slow down".to_string()
        }
        .is_retryable());

        assert!(!LlmError::Configuration("no key".to_string()).is_retryable());
        assert!(!LlmError::MalformedResponse("bad json".to_string()).is_retryable());
        assert!(!LlmError::Rejected {
            status: 401,
            message: "unauthorized".to_string()
        }
        .is_retryable());
        assert!(!LlmError::RetriesExhausted {
            attempts: 4,
            last: Box::new(LlmError::network("timeout")),
        }
        .is_retryable());
    }

    #[test]
    fn test_retries_exhausted_exposes_source() {
        use std::error::Error as _;

        let err = LlmError::RetriesExhausted {
            attempts: 3,
            last: Box::new(LlmError::network("timeout")),
        };
        assert!(err.to_string().contains("after 3 attempts"));
        assert!(err.source().unwrap().to_string().contains("timeout"));
    }
}
