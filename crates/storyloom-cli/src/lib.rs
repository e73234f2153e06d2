//! Storyloom CLI library.
//!
//! Argument parsing, configuration, command execution and output formatting
//! for the `storyloom` binary. Commands are generic over the transport so
//! they run the same against the live backend and a scripted one.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
