//! Extraction command implementations.

use super::read_required;
use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use storyloom_assist::StoryAssistant;
use storyloom_llm::Transport;

/// Execute the characters command.
pub async fn execute_characters<T: Transport>(
    args: ExtractArgs,
    assistant: &StoryAssistant<T>,
    formatter: &Formatter,
) -> Result<String> {
    let text = read_required(args.file.as_deref(), "Story text")?;
    let characters = assistant.extract_characters(&text).await;
    formatter.format_characters(&characters)
}

/// Execute the outline command.
pub async fn execute_outline<T: Transport>(
    args: ExtractArgs,
    assistant: &StoryAssistant<T>,
    formatter: &Formatter,
) -> Result<String> {
    let text = read_required(args.file.as_deref(), "Story text")?;
    let points = assistant.extract_outline(&text).await;
    formatter.format_outline(&points)
}

/// Execute the elements command.
pub async fn execute_elements<T: Transport>(
    args: ExtractArgs,
    assistant: &StoryAssistant<T>,
    formatter: &Formatter,
) -> Result<String> {
    let text = read_required(args.file.as_deref(), "Story text")?;
    let elements = assistant.extract_story_elements(&text).await;
    formatter.format_elements(elements.as_ref())
}
