//! Concept command implementation.

use crate::cli::ConceptArgs;
use crate::error::Result;
use crate::output::Formatter;
use storyloom_assist::StoryAssistant;
use storyloom_llm::Transport;

/// Execute the concept command.
pub async fn execute_concept<T: Transport>(
    args: ConceptArgs,
    assistant: &StoryAssistant<T>,
    formatter: &Formatter,
) -> Result<String> {
    let concept = assistant.generate_concept(&args.into()).await?;
    formatter.format_concept(concept.as_ref())
}
