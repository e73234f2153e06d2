//! Interactive chat REPL.

use crate::cli::ChatArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use storyloom_assist::{ChatAdapter, ChatSession};
use storyloom_llm::Transport;

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplInput {
    /// Leave the session
    Exit,
    /// Show the commands
    Help,
    /// Forget the conversation so far
    Clear,
    /// A question for the assistant
    Ask(String),
    /// Nothing to do
    Empty,
}

/// Parse a REPL line. Lines starting with `/` are commands.
pub fn parse_line(line: &str) -> Result<ReplInput> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ReplInput::Empty);
    }
    if !line.starts_with('/') {
        return Ok(ReplInput::Ask(line.to_string()));
    }

    match line {
        "/exit" | "/quit" | "/q" => Ok(ReplInput::Exit),
        "/help" | "/?" => Ok(ReplInput::Help),
        "/clear" => Ok(ReplInput::Clear),
        other => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type /help for available commands.",
            other
        ))),
    }
}

/// Run the chat command: one question with `--ask`, otherwise a session.
pub async fn run_chat<T: Transport>(
    args: ChatArgs,
    adapter: &ChatAdapter<T>,
    formatter: &Formatter,
    history_size: usize,
) -> Result<()> {
    let mut session = ChatSession::new();
    if let Some(path) = &args.context {
        session = session.with_story_context(std::fs::read_to_string(path)?);
    }

    if let Some(question) = args.ask {
        let reply = session.send(adapter, &question).await;
        println!("{}", formatter.format_chat_reply(&reply)?);
        return Ok(());
    }

    println!("{}", formatter.info(session.greeting()));
    println!("{}", formatter.info("Type /help for commands, /exit to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(history_size)
        .map_err(|e| CliError::Readline(e.to_string()))?
        .build();
    let mut editor =
        DefaultEditor::with_config(editor_config).map_err(|e| CliError::Readline(e.to_string()))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                editor.add_history_entry(line.as_str()).ok();

                match parse_line(&line) {
                    Ok(ReplInput::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplInput::Help) => print_help(formatter),
                    Ok(ReplInput::Clear) => {
                        session.clear();
                        println!("{}", formatter.success("Conversation cleared"));
                    }
                    Ok(ReplInput::Ask(question)) => {
                        let reply = session.send(adapter, &question).await;
                        println!("{}", formatter.format_chat_reply(&reply)?);
                        println!();
                    }
                    Ok(ReplInput::Empty) => {}
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use /exit to quit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();
    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let dir = home.join(".storyloom");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("chat_history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <question>         - Ask the writing assistant");
    println!("  /clear             - Forget the conversation so far");
    println!("  /help, /?          - Show this help");
    println!("  /exit, /quit, /q   - Leave the chat");
    println!();
}
