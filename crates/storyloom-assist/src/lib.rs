//! Storyloom Assist
//!
//! Domain adapters over the structured LLM client: story continuation,
//! character and outline extraction, concept brainstorming and the
//! conversational writing assistant.
//!
//! # Architecture
//!
//! ```text
//! editor text → StoryAssistant → PromptRequest (+ Schema) → StructuredClient
//!                      ↑                                          ↓
//!              typed records  ←  parser  ←  StructuredResult / LlmError
//! ```
//!
//! # Failure policy
//!
//! - Extraction is best-effort: any client failure becomes an empty list or `None`
//! - Continuation reports [`AssistError::ContinuationUnavailable`] for the caller to show
//! - Chat never fails; it answers with a fixed fallback message instead
//! - Adapters never retry on their own; the client's retry policy is the only one
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use storyloom_assist::{AssistConfig, StoryAssistant};
//! use storyloom_llm::{MockTransport, RetryPolicy, StructuredClient};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let transport = MockTransport::with_text("The door creaked open.");
//! let client = Arc::new(StructuredClient::new(transport, RetryPolicy::default()));
//! let assistant = StoryAssistant::new(client, AssistConfig::default());
//!
//! let next = assistant
//!     .continue_text("", "She reached for the handle.", None)
//!     .await
//!     .unwrap();
//! assert_eq!(next, "The door creaked open.");
//! # });
//! ```

#![warn(missing_docs)]

mod assistant;
mod chat;
mod config;
mod error;
mod parser;
mod prompt;
mod schemas;
mod types;


pub use assistant::StoryAssistant;
pub use chat::{ChatAdapter, ChatSession, CHAT_FALLBACK, CHAT_GREETING, CHAT_PERSONA};
pub use config::AssistConfig;
pub use error::AssistError;
pub use prompt::{head_chars, tail_chars};
pub use storyloom_domain::CharacterSketch;
pub use types::{ChatReply, StoryElements};
