//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storyloom_domain::ConceptInputs;

/// Storyloom - AI co-writing tools for fiction.
#[derive(Debug, Parser)]
#[command(name = "storyloom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini API key (overrides the configuration file)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model name (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable tables (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Continue writing from the end of a text
    Continue(ContinueArgs),

    /// Extract character sheets from a text
    Characters(ExtractArgs),

    /// Map a text onto a tension curve of plot stages
    Outline(ExtractArgs),

    /// Extract characters and plot stages in one pass
    Elements(ExtractArgs),

    /// Brainstorm a story concept
    Concept(ConceptArgs),

    /// Talk to the writing assistant
    Chat(ChatArgs),
}

/// Arguments for the continue command.
#[derive(Debug, Parser)]
pub struct ContinueArgs {
    /// Current chapter text (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Earlier chapters for context
    #[arg(short, long)]
    pub previous: Option<PathBuf>,

    /// Style instruction, e.g. "Make it darker"
    #[arg(short, long)]
    pub style: Option<String>,
}

/// Arguments for the extraction commands.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Story text (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for the concept command.
#[derive(Debug, Parser)]
pub struct ConceptArgs {
    /// Genre, e.g. "Cyberpunk"
    #[arg(short, long, default_value = "")]
    pub genre: String,

    /// Theme or core idea
    #[arg(short, long, default_value = "")]
    pub theme: String,

    /// Protagonist sketch
    #[arg(long, default_value = "")]
    pub hero: String,

    /// Setting
    #[arg(short, long, default_value = "")]
    pub setting: String,
}

/// Arguments for the chat command.
#[derive(Debug, Parser)]
pub struct ChatArgs {
    /// Story text the assistant should know about
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Ground answers in web search and list sources
    #[arg(long)]
    pub web_search: bool,

    /// Ask a single question and exit instead of starting a session
    #[arg(short, long)]
    pub ask: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<ConceptArgs> for ConceptInputs {
    fn from(args: ConceptArgs) -> Self {
        ConceptInputs {
            genre: args.genre,
            theme: args.theme,
            hero: args.hero,
            setting: args.setting,
        }
    }
}
