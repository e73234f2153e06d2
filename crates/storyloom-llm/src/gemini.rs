//! Gemini generateContent transport and wire format
//!
//! Translates [`PromptRequest`] and [`Schema`] into the JSON body of
//! `POST {endpoint}/models/{model}:generateContent?key={api_key}` and decodes
//! the response envelope.
//!
//! # Examples
//!
//! ```no_run
//! use storyloom_llm::{GeminiConfig, GeminiTransport, RetryPolicy, StructuredClient};
//!
//! let config = GeminiConfig::from_env().expect("GEMINI_API_KEY must be set");
//! let transport = GeminiTransport::new(&config).expect("valid configuration");
//! let client = StructuredClient::new(transport, RetryPolicy::default());
//! ```

use crate::client::GroundingSource;
use crate::request::PromptRequest;
use crate::schema::{Schema, SchemaKind};
use crate::transport::{Transport, TransportResponse};
use crate::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::time::Duration;
use storyloom_domain::{Message, Speaker};
use tracing::debug;

/// Default API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default timeout for one HTTP request (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variables consulted for the API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Connection settings for the Gemini backend
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; never logged
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Defaults plus the API key from the environment
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Configuration`] if no key variable is set.
    pub fn from_env() -> Result<Self, LlmError> {
        let mut config = Self::default();
        config.api_key = api_key_from_env().ok_or_else(|| {
            LlmError::Configuration(format!("set one of {} to your API key", API_KEY_VARS.join(", ")))
        })?;
        Ok(config)
    }

    /// Fill the API key from the environment when the config has none
    pub fn with_env_fallback(mut self) -> Self {
        if self.api_key.trim().is_empty() {
            if let Some(key) = api_key_from_env() {
                self.api_key = key;
            }
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::Configuration("API key is missing".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(LlmError::Configuration("model must not be empty".to_string()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(LlmError::Configuration("endpoint must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(LlmError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// URL of the generateContent method (without the key)
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|key| !key.trim().is_empty())
}

/// HTTP transport for the Gemini generateContent API
pub struct GeminiTransport {
    url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiTransport {
    /// Create a transport from validated configuration
    ///
    /// Fails fast on a missing API key so that configuration problems
    /// surface at startup instead of on the first request.
    pub fn new(config: &GeminiConfig) -> Result<Self, LlmError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: config.generate_url(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
        })
    }
}

#[async_trait]
impl Transport for GeminiTransport {
    async fn send(&self, request: &GenerateContentRequest) -> Result<TransportResponse, LlmError> {
        debug!(model = %self.model, contents = request.contents.len(), "POST generateContent");

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    LlmError::Configuration(format!("Invalid request: {}", e))
                } else {
                    LlmError::network(format!("Request failed: {}", e.without_url()))
                }
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response body: {}", e.without_url())))?;

        Ok(TransportResponse { status, body })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Request body of generateContent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; the prompt is the last user turn
    pub contents: Vec<Content>,

    /// System instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    /// Structured-output settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,

    /// Tools such as search grounding
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
}

/// One content block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    /// "user" or "model"; absent for system instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Text parts
    pub parts: Vec<Part>,
}

/// A text part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    /// The text
    pub text: String,
}

/// Structured-output configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always "application/json" here
    pub response_mime_type: String,

    /// Schema in wire format
    pub response_schema: Value,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn from_message(message: &Message) -> Self {
        Self::text(Some(wire_role(message.speaker)), &message.text)
    }
}

/// Wire role for a speaker
pub fn wire_role(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "user",
        Speaker::Assistant => "model",
    }
}

impl GenerateContentRequest {
    /// Translate a prompt request into the wire body
    pub fn from_prompt(request: &PromptRequest) -> Self {
        let mut contents: Vec<Content> = request.history.iter().map(Content::from_message).collect();
        contents.push(Content::text(Some("user"), &request.prompt));

        let system_instruction = request
            .system_instruction
            .as_deref()
            .map(|text| Content::text(None, text));

        let generation_config = request.output_schema.as_ref().map(|schema| GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema_to_wire(schema),
        });

        let tools = if request.web_search {
            vec![json!({ "google_search": {} })]
        } else {
            Vec::new()
        };

        Self {
            contents,
            system_instruction,
            generation_config,
            tools,
        }
    }
}

/// Translate a schema descriptor into the backend's schema dialect
pub fn schema_to_wire(schema: &Schema) -> Value {
    let mut node = Map::new();

    let type_name = match &schema.kind {
        SchemaKind::String => "STRING",
        SchemaKind::Integer => "INTEGER",
        SchemaKind::Number => "NUMBER",
        SchemaKind::Boolean => "BOOLEAN",
        SchemaKind::Array(_) => "ARRAY",
        SchemaKind::Object(_) => "OBJECT",
    };
    node.insert("type".to_string(), json!(type_name));

    if let Some(description) = &schema.description {
        node.insert("description".to_string(), json!(description));
    }

    match &schema.kind {
        SchemaKind::Array(items) => {
            node.insert("items".to_string(), schema_to_wire(items));
        }
        SchemaKind::Object(fields) => {
            let properties: Map<String, Value> = fields
                .iter()
                .map(|f| (f.name.clone(), schema_to_wire(&f.schema)))
                .collect();
            let required: Vec<&str> = fields
                .iter()
                .filter(|f| f.required)
                .map(|f| f.name.as_str())
                .collect();
            let ordering: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();

            node.insert("properties".to_string(), Value::Object(properties));
            if !required.is_empty() {
                node.insert("required".to_string(), json!(required));
            }
            node.insert("propertyOrdering".to_string(), json!(ordering));
        }
        _ => {}
    }

    Value::Object(node)
}

/// Response envelope of generateContent (only the parts we read)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate answers; only the first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate answer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<CandidateContent>,

    /// Search grounding details
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Generated content of a candidate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    /// Content parts
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// A part of generated content
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatePart {
    /// Text, if the part is textual
    #[serde(default)]
    pub text: Option<String>,
}

/// Grounding metadata attached to a candidate
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Sources the answer was grounded on
    #[serde(default)]
    pub grounding_attributions: Vec<GroundingAttribution>,
}

/// One grounding attribution
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingAttribution {
    /// Web source, if any
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// A cited web page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebSource {
    /// Page URI
    #[serde(default)]
    pub uri: Option<String>,

    /// Page title
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }

    /// Web sources of the first candidate that have both a URI and a title
    pub fn sources(&self) -> Vec<GroundingSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_attributions
                    .iter()
                    .filter_map(|a| a.web.as_ref())
                    .filter_map(|web| match (&web.uri, &web.title) {
                        (Some(uri), Some(title)) if !uri.is_empty() && !title.is_empty() => {
                            Some(GroundingSource {
                                uri: uri.clone(),
                                title: title.clone(),
                            })
                        }
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
