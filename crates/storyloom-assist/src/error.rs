//! Error types for the assist adapters

use thiserror::Error;

/// Errors surfaced by the adapters
///
/// Extraction adapters swallow client failures, so the only errors that
/// reach callers are the ones they are expected to act on.
#[derive(Error, Debug)]
pub enum AssistError {
    /// The continuation could not be produced; safe to show as a transient notice
    #[error("Continuation unavailable: {0}")]
    ContinuationUnavailable(String),

    /// The caller violated an input precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
