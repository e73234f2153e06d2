//! Prompt requests handed to the structured client

use crate::schema::Schema;
use storyloom_domain::Message;

/// A single call to the generative backend
///
/// Built fresh for every call and not modified once handed to the client.
///
/// # Examples
///
/// ```
/// use storyloom_llm::{PromptRequest, Schema};
/// use storyloom_domain::Message;
///
/// let request = PromptRequest::new("Suggest a synonym for 'gloomy'")
///     .with_history(vec![Message::user("Hi"), Message::assistant("Hello!")])
///     .with_system_instruction("You are a helpful creative writing assistant.")
///     .with_schema(Schema::array(Schema::string()));
///
/// assert_eq!(request.history.len(), 2);
/// assert!(request.output_schema.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    /// The prompt for this turn
    pub prompt: String,

    /// Earlier turns, oldest first
    pub history: Vec<Message>,

    /// Shape the backend should conform its output to
    pub output_schema: Option<Schema>,

    /// System instruction (persona, output rules)
    pub system_instruction: Option<String>,

    /// Ask the backend to ground the answer with web search
    pub web_search: bool,
}

impl PromptRequest {
    /// Create a request with only a prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            history: Vec::new(),
            output_schema: None,
            system_instruction: None,
            web_search: false,
        }
    }

    /// Replay these turns before the prompt
    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    /// Request JSON output conforming to `schema`
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// Set the system instruction
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Enable or disable search grounding
    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    /// Whether structured (JSON) output was requested
    pub fn is_structured(&self) -> bool {
        self.output_schema.is_some()
    }
}
