//! Continue command implementation.

use super::read_required;
use crate::cli::ContinueArgs;
use crate::error::Result;
use crate::output::Formatter;
use storyloom_assist::StoryAssistant;
use storyloom_llm::Transport;

/// Execute the continue command.
pub async fn execute_continue<T: Transport>(
    args: ContinueArgs,
    assistant: &StoryAssistant<T>,
    formatter: &Formatter,
) -> Result<String> {
    let current = read_required(args.file.as_deref(), "Current text")?;
    let previous = match args.previous {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };

    let text = assistant
        .continue_text(&previous, &current, args.style.as_deref())
        .await?;

    formatter.format_continuation(&text)
}
