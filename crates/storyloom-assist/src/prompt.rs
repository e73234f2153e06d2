//! Prompt construction for the writing adapters

use crate::config::AssistConfig;
use storyloom_domain::ConceptInputs;

/// Last `max` characters of `text`
///
/// Counts characters rather than bytes, so multi-byte scripts are never
/// split mid-codepoint.
///
/// ```
/// use storyloom_assist::tail_chars;
/// assert_eq!(tail_chars("夜色很深", 2), "很深");
/// assert_eq!(tail_chars("short", 100), "short");
/// ```
pub fn tail_chars(text: &str, max: usize) -> &str {
    let total = text.chars().count();
    if total <= max {
        return text;
    }
    if max == 0 {
        return "";
    }
    match text.char_indices().nth(total - max) {
        Some((offset, _)) => &text[offset..],
        None => text,
    }
}

/// First `max` characters of `text`
///
/// ```
/// use storyloom_assist::head_chars;
/// assert_eq!(head_chars("夜色很深", 2), "夜色");
/// ```
pub fn head_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

pub(crate) fn continuation(
    config: &AssistConfig,
    previous: &str,
    current: &str,
    style: Option<&str>,
) -> String {
    let style = style
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(&config.default_style);

    let mut prompt = String::new();
    prompt.push_str("You are a co-writer for a novel.\n\n");
    prompt.push_str("Previous Context:\n");
    prompt.push_str(tail_chars(previous, config.previous_context_chars));
    prompt.push_str("\n\nCurrent Writing:\n");
    prompt.push_str(tail_chars(current, config.current_context_chars));
    prompt.push_str("\n\nInstructions:\n");
    prompt.push_str(style);
    prompt.push_str(&format!(
        "\nContinue the story naturally from the last sentence. Write about {}-{} words.",
        config.continuation_min_words, config.continuation_max_words
    ));
    prompt
}

pub(crate) fn characters(config: &AssistConfig, text: &str) -> String {
    format!(
        "Analyze the following story text and extract the key characters.\n\
         Focus on their core narrative elements: Conflict, Obstacle, Action, and Ending \
         (if apparent or implied).\n\n\
         Text:\n{}",
        head_chars(text, config.max_input_chars)
    )
}

pub(crate) fn outline(config: &AssistConfig, text: &str) -> String {
    format!(
        "Analyze the following story text and create a narrative arc outline.\n\
         Map the story progression to a tension curve.\n\
         Provide {}-{} key plot points. Rate the tension of each from 0 (calm) to 100 (climax).\n\n\
         Text:\n{}",
        config.outline_min_points,
        config.outline_max_points,
        head_chars(text, config.max_input_chars)
    )
}

pub(crate) fn concept(inputs: &ConceptInputs) -> String {
    let mut prompt = String::from(
        "Act as a professional story consultant. Generate a story concept from these inputs:\n",
    );
    for (label, value) in [
        ("Genre", &inputs.genre),
        ("Theme/Core Idea", &inputs.theme),
        ("Protagonist", &inputs.hero),
        ("Setting", &inputs.setting),
    ] {
        let value = value.trim();
        if !value.is_empty() {
            prompt.push_str(&format!("{}: {}\n", label, value));
        }
    }
    prompt.push_str(
        "\nCreate a creative title, a 100-word synopsis, and define the main character \
         with their core conflict.",
    );
    prompt
}

pub(crate) fn story_elements(config: &AssistConfig, text: &str) -> String {
    format!(
        "Analyze the following story text and extract potential character cards and key outline points.\n\
         - Extract 1-3 main or important supporting characters: name, role, conflict, or a brief description.\n\
         - Extract 3-5 key plot stages, each with a description and a tension score from 0 to 100.\n\n\
         Text:\n{}",
        head_chars(text, config.max_input_chars)
    )
}

pub(crate) fn chat_system_instruction(persona: &str, context: Option<&str>, max_context: usize) -> String {
    match context.map(str::trim).filter(|c| !c.is_empty()) {
        Some(context) => format!(
            "{}\n\nThe current writing context is:\n{}",
            persona,
            tail_chars(context, max_context)
        ),
        None => persona.to_string(),
    }
}
