//! Command execution against a scripted backend

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use storyloom_assist::{AssistConfig, StoryAssistant};
use storyloom_cli::cli::{ConceptArgs, ContinueArgs, ExtractArgs};
use storyloom_cli::config::OutputFormat;
use storyloom_cli::{commands, CliError, Formatter};
use storyloom_llm::{MockTransport, RetryPolicy, StructuredClient};
use tempfile::TempDir;

fn assistant(transport: &MockTransport) -> StoryAssistant<MockTransport> {
    let client = StructuredClient::new(transport.clone(), RetryPolicy::no_retry());
    StoryAssistant::new(Arc::new(client), AssistConfig::default())
}

fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[tokio::test]
async fn test_characters_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(&dir, "chapter.txt", "Mara drew her sword against her brother.");
    let transport = MockTransport::with_text(
        r#"[{"name": "Mara", "conflict": "Crown", "obstacle": "Brother",
             "action": "Duel", "ending": "Exile", "role": "Protagonist"}]"#,
    );

    let output = commands::execute_characters(
        ExtractArgs { file: Some(file) },
        &assistant(&transport),
        &Formatter::new(OutputFormat::Json, false),
    )
    .await
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["name"], "Mara");
    assert_eq!(value[0]["ending"], "Exile");
}

#[tokio::test]
async fn test_outline_degrades_to_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(&dir, "chapter.txt", "Some prose.");
    let transport = MockTransport::always_status(503, "unavailable");

    let output = commands::execute_outline(
        ExtractArgs { file: Some(file) },
        &assistant(&transport),
        &Formatter::new(OutputFormat::Table, false),
    )
    .await
    .unwrap();

    assert!(output.contains("No outline points found"));
}

#[tokio::test]
async fn test_blank_input_is_rejected_before_any_call() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(&dir, "empty.txt", "  \n");
    let transport = MockTransport::new();

    let result = commands::execute_elements(
        ExtractArgs { file: Some(file) },
        &assistant(&transport),
        &Formatter::new(OutputFormat::Table, false),
    )
    .await;

    assert!(matches!(result, Err(CliError::InvalidInput(_))));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_continue_with_previous_context() {
    let dir = tempfile::tempdir().unwrap();
    let current = write(&dir, "ch2.txt", "The bell rang a third time.");
    let previous = write(&dir, "ch1.txt", "Nobody had rung the bell in forty years.");
    let transport = MockTransport::with_text("Then the sea answered.");

    let output = commands::execute_continue(
        ContinueArgs {
            file: Some(current),
            previous: Some(previous),
            style: None,
        },
        &assistant(&transport),
        &Formatter::new(OutputFormat::Table, false),
    )
    .await
    .unwrap();

    assert_eq!(output, "Then the sea answered.");
    let prompt = &transport.last_request().unwrap().contents[0].parts[0].text;
    assert!(prompt.contains("forty years"));
    assert!(prompt.contains("a third time"));
}

#[tokio::test]
async fn test_continue_failure_surfaces_error() {
    let dir = tempfile::tempdir().unwrap();
    let current = write(&dir, "ch.txt", "Text.");
    let transport = MockTransport::always_status(401, "bad key");

    let result = commands::execute_continue(
        ContinueArgs {
            file: Some(current),
            previous: None,
            style: None,
        },
        &assistant(&transport),
        &Formatter::new(OutputFormat::Table, false),
    )
    .await;

    assert!(matches!(result, Err(CliError::Assist(_))));
}

#[tokio::test]
async fn test_concept_without_genre_or_theme() {
    let transport = MockTransport::new();

    let result = commands::execute_concept(
        ConceptArgs {
            genre: String::new(),
            theme: String::new(),
            hero: "A lighthouse keeper".to_string(),
            setting: String::new(),
        },
        &assistant(&transport),
        &Formatter::new(OutputFormat::Table, false),
    )
    .await;

    assert!(matches!(result, Err(CliError::Assist(_))));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_concept_table() {
    let transport = MockTransport::with_text(
        r#"{"title": "Salt Lines", "synopsis": "A cartographer maps a drowning city.",
            "characterName": "Ines", "characterRole": "Protagonist",
            "characterDesc": "Precise", "characterConflict": "Duty against love"}"#,
    );

    let output = commands::execute_concept(
        ConceptArgs {
            genre: "Fantasy".to_string(),
            theme: String::new(),
            hero: String::new(),
            setting: String::new(),
        },
        &assistant(&transport),
        &Formatter::new(OutputFormat::Table, false),
    )
    .await
    .unwrap();

    assert!(output.contains("Salt Lines"));
    assert!(output.contains("Duty against love"));
}
