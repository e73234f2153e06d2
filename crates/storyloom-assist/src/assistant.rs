//! Writing adapters: continuation, extraction and brainstorming

use crate::config::AssistConfig;
use crate::error::AssistError;
use crate::parser::{parse_characters, parse_outline, parse_story_elements};
use crate::prompt;
use crate::schemas;
use crate::types::StoryElements;
use std::sync::Arc;
use storyloom_domain::{CharacterSketch, ConceptInputs, OutlinePoint, StoryConcept};
use storyloom_llm::{PromptRequest, StructuredClient, Transport};
use tracing::{debug, info, warn};

/// Turns editor text into prompts and prompt results into records
///
/// Holds no state besides the shared client and its configuration, so one
/// assistant can serve concurrent requests.
pub struct StoryAssistant<T: Transport> {
    client: Arc<StructuredClient<T>>,
    config: AssistConfig,
}

impl<T: Transport> StoryAssistant<T> {
    /// Create an assistant over a shared client
    pub fn new(client: Arc<StructuredClient<T>>, config: AssistConfig) -> Self {
        Self { client, config }
    }

    /// The adapter configuration
    pub fn config(&self) -> &AssistConfig {
        &self.config
    }

    /// The underlying client
    pub fn client(&self) -> &Arc<StructuredClient<T>> {
        &self.client
    }

    /// Write the next passage after `current`
    ///
    /// Only the tail of each context is sent. The model's text is returned
    /// verbatim, even when empty.
    ///
    /// # Errors
    ///
    /// [`AssistError::ContinuationUnavailable`] when the client fails for any reason.
    pub async fn continue_text(
        &self,
        previous: &str,
        current: &str,
        style: Option<&str>,
    ) -> Result<String, AssistError> {
        let request = PromptRequest::new(prompt::continuation(&self.config, previous, current, style));
        debug!(prompt_chars = request.prompt.chars().count(), "Requesting continuation");

        match self.client.execute(&request).await {
            Ok(result) => {
                let text = result.into_text();
                info!(chars = text.chars().count(), "Continuation generated");
                Ok(text)
            }
            Err(e) => {
                warn!("Continuation failed: {}", e);
                Err(AssistError::ContinuationUnavailable(e.to_string()))
            }
        }
    }

    /// Extract the key characters from `text`
    ///
    /// Returns an empty list when the model cannot be reached or answers
    /// with something unusable.
    pub async fn extract_characters(&self, text: &str) -> Vec<CharacterSketch> {
        let request = PromptRequest::new(prompt::characters(&self.config, text))
            .with_schema(schemas::characters());

        match self.client.execute(&request).await {
            Ok(result) => {
                let sketches = result.as_json().map(parse_characters).unwrap_or_default();
                info!("Extracted {} characters", sketches.len());
                sketches
            }
            Err(e) => {
                warn!("Character extraction failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Map `text` onto a tension curve of plot stages
    ///
    /// Returns an empty list on failure.
    pub async fn extract_outline(&self, text: &str) -> Vec<OutlinePoint> {
        let request = PromptRequest::new(prompt::outline(&self.config, text))
            .with_schema(schemas::outline());

        match self.client.execute(&request).await {
            Ok(result) => {
                let points = result.as_json().map(parse_outline).unwrap_or_default();
                info!("Extracted {} outline points", points.len());
                points
            }
            Err(e) => {
                warn!("Outline extraction failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Brainstorm a title, synopsis and protagonist
    ///
    /// # Errors
    ///
    /// [`AssistError::InvalidInput`] when both genre and theme are blank; the
    /// backend is not contacted. Backend failures yield `Ok(None)`.
    pub async fn generate_concept(
        &self,
        inputs: &ConceptInputs,
    ) -> Result<Option<StoryConcept>, AssistError> {
        inputs.validate().map_err(AssistError::InvalidInput)?;

        let request = PromptRequest::new(prompt::concept(inputs)).with_schema(schemas::concept());

        match self.client.execute_as::<StoryConcept>(&request).await {
            Ok(concept) if concept.title.trim().is_empty() => {
                warn!("Concept came back without a title");
                Ok(None)
            }
            Ok(concept) => {
                info!(title = %concept.title, "Concept generated");
                Ok(Some(concept))
            }
            Err(e) => {
                warn!("Concept generation failed: {}", e);
                Ok(None)
            }
        }
    }

    /// Extract characters and plot stages in a single call
    ///
    /// Returns `None` on failure.
    pub async fn extract_story_elements(&self, text: &str) -> Option<StoryElements> {
        let request = PromptRequest::new(prompt::story_elements(&self.config, text))
            .with_schema(schemas::story_elements());

        match self.client.execute(&request).await {
            Ok(result) => {
                let elements = result.as_json().map(parse_story_elements)?;
                info!(
                    characters = elements.characters.len(),
                    points = elements.outline_points.len(),
                    "Extracted story elements"
                );
                Some(elements)
            }
            Err(e) => {
                warn!("Story element extraction failed: {}", e);
                None
            }
        }
    }
}
