//! Storyloom CLI - AI co-writing tools from the command line.

use clap::Parser;
use std::sync::Arc;
use storyloom_assist::{ChatAdapter, StoryAssistant};
use storyloom_cli::{commands, repl, Cli, Command, Config, Formatter};
use storyloom_llm::{GeminiTransport, StructuredClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so command output can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run() -> storyloom_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load_or_init(cli.config.as_deref())?;
    config.validate()?;

    if let Some(api_key) = cli.api_key {
        config.gemini.api_key = api_key;
    }
    if let Some(model) = cli.model {
        config.gemini.model = model;
    }
    let gemini = config.gemini.clone().with_env_fallback();
    debug!(?gemini, "Resolved backend configuration");

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Fails fast on a missing key, before any command runs
    let transport = GeminiTransport::new(&gemini)?;
    let client = Arc::new(StructuredClient::new(transport, config.retry.clone()));

    let assistant = StoryAssistant::new(Arc::clone(&client), config.assist.clone());
    let output = match cli.command {
        Command::Continue(args) => commands::execute_continue(args, &assistant, &formatter).await?,
        Command::Characters(args) => commands::execute_characters(args, &assistant, &formatter).await?,
        Command::Outline(args) => commands::execute_outline(args, &assistant, &formatter).await?,
        Command::Elements(args) => commands::execute_elements(args, &assistant, &formatter).await?,
        Command::Concept(args) => commands::execute_concept(args, &assistant, &formatter).await?,
        Command::Chat(args) => {
            let adapter = ChatAdapter::new(client, &config.assist).with_web_search(args.web_search);
            return repl::run_chat(args, &adapter, &formatter, config.settings.history_size).await;
        }
    };
    println!("{}", output);

    Ok(())
}
