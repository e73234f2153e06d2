//! Error types for the CLI application.

use storyloom_assist::AssistError;
use storyloom_llm::LlmError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend client error (missing key, rejected request, ...)
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Adapter error
    #[error(transparent)]
    Assist(#[from] AssistError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Line editor failure in the chat REPL
    #[error("Line editor error: {0}")]
    Readline(String),
}
