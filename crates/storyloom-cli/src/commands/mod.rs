//! Command implementations.
//!
//! Each command returns its formatted output instead of printing it.

pub mod concept;
pub mod continuation;
pub mod extract;

pub use self::concept::execute_concept;
pub use self::continuation::execute_continue;
pub use self::extract::{execute_characters, execute_elements, execute_outline};

use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;

/// Read text from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => Ok(std::fs::read_to_string(p)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Read non-blank text, naming what was expected in the error.
pub(crate) fn read_required(path: Option<&Path>, what: &str) -> Result<String> {
    let text = read_input(path)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(format!("{} is empty", what)));
    }
    Ok(text)
}
