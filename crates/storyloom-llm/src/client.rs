//! Structured client: retry loop, response classification and parsing

use crate::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::request::PromptRequest;
use crate::retry::RetryPolicy;
use crate::schema::Schema;
use crate::transport::{Transport, TransportResponse};
use crate::LlmError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Longest body excerpt carried in error messages
const ERROR_BODY_LIMIT: usize = 300;

/// Output of a successful call
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredResult {
    /// Parsed JSON, already checked against the requested schema
    Json(Value),
    /// Raw text; empty if the backend returned none
    Text(String),
}

impl StructuredResult {
    /// The JSON value, if this is a structured result
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            StructuredResult::Json(v) => Some(v),
            StructuredResult::Text(_) => None,
        }
    }

    /// Consume into text; JSON is re-serialized
    pub fn into_text(self) -> String {
        match self {
            StructuredResult::Text(t) => t,
            StructuredResult::Json(v) => v.to_string(),
        }
    }
}

/// A web page the backend grounded its answer on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    /// Page URI
    pub uri: String,
    /// Page title
    pub title: String,
}

/// A successful call: output plus any grounding sources
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    /// The output
    pub output: StructuredResult,
    /// Cited sources (empty unless web search was requested)
    pub sources: Vec<GroundingSource>,
}

/// The one client every adapter goes through
///
/// Holds no mutable state between calls, so a single instance can be
/// shared (e.g. behind an `Arc`) by concurrent adapter invocations.
pub struct StructuredClient<T: Transport> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: Transport> StructuredClient<T> {
    /// Create a client over a transport
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The retry policy
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Execute a request and return its output
    ///
    /// # Errors
    ///
    /// - [`LlmError::RetriesExhausted`] if every attempt failed transiently
    /// - [`LlmError::Rejected`] / [`LlmError::Configuration`] immediately, without retry
    /// - [`LlmError::MalformedResponse`] if a schema was given and the text
    ///   is not JSON of that shape (never retried)
    pub async fn execute(&self, request: &PromptRequest) -> Result<StructuredResult, LlmError> {
        self.generate(request).await.map(|g| g.output)
    }

    /// Execute a request and deserialize the JSON output into `D`
    ///
    /// Without a schema the raw text is parsed as JSON instead.
    pub async fn execute_as<D: DeserializeOwned>(&self, request: &PromptRequest) -> Result<D, LlmError> {
        match self.execute(request).await? {
            StructuredResult::Json(value) => serde_json::from_value(value)
                .map_err(|e| LlmError::MalformedResponse(format!("Unexpected shape: {}", e))),
            StructuredResult::Text(text) => serde_json::from_str(strip_code_fence(&text))
                .map_err(|e| LlmError::MalformedResponse(format!("Failed to parse JSON: {}", e))),
        }
    }

    /// Execute a request and return output plus grounding sources
    pub async fn generate(&self, request: &PromptRequest) -> Result<Generation, LlmError> {
        let body = GenerateContentRequest::from_prompt(request);
        debug!(
            model = self.transport.model_name(),
            prompt_chars = request.prompt.chars().count(),
            history = request.history.len(),
            structured = request.is_structured(),
            "Executing prompt request"
        );

        let envelope = self.send_with_retry(&body).await?;
        let text = envelope.text().unwrap_or_default();

        let output = match &request.output_schema {
            Some(schema) => StructuredResult::Json(parse_structured(text, schema)?),
            None => StructuredResult::Text(text.to_string()),
        };

        Ok(Generation {
            output,
            sources: envelope.sources(),
        })
    }

    async fn send_with_retry(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.policy.max_attempts {
            match self.attempt(body).await {
                Ok(envelope) => {
                    if attempts > 0 {
                        info!("Request succeeded after {} retries", attempts);
                    }
                    return Ok(envelope);
                }
                Err(e) if e.is_retryable() => {
                    warn!("Attempt {}/{} failed: {}", attempts + 1, self.policy.max_attempts, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }

            attempts += 1;
            if attempts < self.policy.max_attempts {
                let delay = self.policy.delay(attempts - 1);
                debug!("Backing off for {:?}", delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(LlmError::RetriesExhausted {
            attempts,
            last: Box::new(last_error.unwrap_or_else(|| {
                LlmError::Configuration("retry policy allows no attempts".to_string())
            })),
        })
    }

    async fn attempt(&self, body: &GenerateContentRequest) -> Result<GenerateContentResponse, LlmError> {
        let response = self.transport.send(body).await?;
        classify(response)
    }
}

/// Map an HTTP outcome onto a decoded envelope or a typed error
fn classify(response: TransportResponse) -> Result<GenerateContentResponse, LlmError> {
    let TransportResponse { status, body } = response;
    match status {
        200..=299 => serde_json::from_str(&body).map_err(|e| {
            LlmError::MalformedResponse(format!("Undecodable response envelope: {}", e))
        }),
        408 | 429 | 500..=599 => Err(LlmError::Transient {
            status: Some(status),
            message: format!("HTTP {}: {}", status, excerpt(&body)),
        }),
        _ => Err(LlmError::Rejected {
            status,
            message: excerpt(&body),
        }),
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= ERROR_BODY_LIMIT {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(ERROR_BODY_LIMIT).collect();
        format!("{}...", cut)
    }
}

/// Parse structured output and check it against the schema
fn parse_structured(text: &str, schema: &Schema) -> Result<Value, LlmError> {
    let json_str = strip_code_fence(text);
    if json_str.is_empty() {
        return Err(LlmError::MalformedResponse(
            "Empty response where JSON was requested".to_string(),
        ));
    }

    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| LlmError::MalformedResponse(format!("JSON parse error: {}", e)))?;

    schema
        .validate(&value)
        .map_err(|e| LlmError::MalformedResponse(format!("Schema mismatch at {}", e)))?;

    Ok(value)
}

/// Remove a surrounding markdown code fence, if any
///
/// Backends sometimes wrap JSON in ```json ... ``` even when asked not to.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    // Drop the opening fence line (``` or ```json)
    let without_open = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return "",
    };
    without_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}
