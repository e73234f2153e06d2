//! Conversational writing assistant

use crate::config::AssistConfig;
use crate::prompt;
use crate::types::ChatReply;
use std::sync::Arc;
use storyloom_domain::Message;
use storyloom_llm::{PromptRequest, StructuredClient, Transport};
use tracing::{debug, warn};

/// Persona given to the model on every chat turn
pub const CHAT_PERSONA: &str = "You are a helpful, creative writing assistant. \
Help the writer with research, synonyms, plot holes and world-building. \
Keep answers concise and practical.";

/// Reply shown when the model cannot be reached
pub const CHAT_FALLBACK: &str =
    "Sorry, I can't reach the well of inspiration right now. Please try again in a moment.";

/// Opening line shown to the writer before the first turn
pub const CHAT_GREETING: &str =
    "Hi! I'm your writing assistant. Need research, plot ideas or a little inspiration?";

/// Answers free-form questions about the writer's work
pub struct ChatAdapter<T: Transport> {
    client: Arc<StructuredClient<T>>,
    context_chars: usize,
    web_search: bool,
}

impl<T: Transport> ChatAdapter<T> {
    /// Create a chat adapter over a shared client
    pub fn new(client: Arc<StructuredClient<T>>, config: &AssistConfig) -> Self {
        Self {
            client,
            context_chars: config.chat_context_chars,
            web_search: false,
        }
    }

    /// Ask the backend to ground answers in web search
    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    /// Answer `text` given the prior conversation
    ///
    /// `history` is not modified. Never fails: on any client error the reply
    /// carries [`CHAT_FALLBACK`] and `degraded` is set.
    pub async fn chat(&self, history: &[Message], text: &str) -> ChatReply {
        self.chat_with_context(history, text, None).await
    }

    /// Like [`chat`](Self::chat), with the story being written as context
    pub async fn chat_with_context(
        &self,
        history: &[Message],
        text: &str,
        story_context: Option<&str>,
    ) -> ChatReply {
        let request = PromptRequest::new(text)
            .with_history(history.to_vec())
            .with_system_instruction(prompt::chat_system_instruction(
                CHAT_PERSONA,
                story_context,
                self.context_chars,
            ))
            .with_web_search(self.web_search);
        debug!(history = history.len(), web_search = self.web_search, "Sending chat turn");

        match self.client.generate(&request).await {
            Ok(generation) => {
                let text = generation.output.into_text();
                if text.trim().is_empty() {
                    warn!("Chat reply was empty");
                    return Self::fallback();
                }
                ChatReply {
                    text,
                    sources: generation.sources,
                    degraded: false,
                }
            }
            Err(e) => {
                warn!("Chat failed: {}", e);
                Self::fallback()
            }
        }
    }

    fn fallback() -> ChatReply {
        ChatReply {
            text: CHAT_FALLBACK.to_string(),
            sources: Vec::new(),
            degraded: true,
        }
    }
}

/// A running conversation
///
/// The greeting is shown to the writer but never replayed to the model.
/// Turns are only recorded after a successful reply, so a failed question
/// can simply be asked again.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<Message>,
    story_context: Option<String>,
}

impl ChatSession {
    /// Start an empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the story being written as context for every turn
    pub fn with_story_context(mut self, context: impl Into<String>) -> Self {
        self.story_context = Some(context.into());
        self
    }

    /// The opening line to display
    pub fn greeting(&self) -> &'static str {
        CHAT_GREETING
    }

    /// Recorded turns, oldest first
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Ask a question, recording both turns when the reply is real
    pub async fn send<T: Transport>(&mut self, adapter: &ChatAdapter<T>, text: &str) -> ChatReply {
        let reply = adapter
            .chat_with_context(&self.history, text, self.story_context.as_deref())
            .await;
        if !reply.degraded {
            self.history.push(Message::user(text));
            self.history.push(Message::assistant(reply.text.clone()));
        }
        reply
    }

    /// Forget every recorded turn
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
