//! Configuration for the assist adapters

use serde::{Deserialize, Serialize};

/// Style instruction used when the caller gives none
pub const DEFAULT_STYLE: &str = "Maintain the tone and style.";

/// Truncation lengths and prompt knobs for the adapters
///
/// All lengths are counted in characters, never bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistConfig {
    /// Trailing characters of previous context embedded in a continuation prompt
    pub previous_context_chars: usize,

    /// Trailing characters of the current chapter embedded in a continuation prompt
    pub current_context_chars: usize,

    /// Leading characters of text sent for extraction
    pub max_input_chars: usize,

    /// Fewest outline stages requested
    pub outline_min_points: usize,

    /// Most outline stages requested
    pub outline_max_points: usize,

    /// Lower bound of the requested continuation length (words)
    pub continuation_min_words: u32,

    /// Upper bound of the requested continuation length (words)
    pub continuation_max_words: u32,

    /// Trailing characters of story context given to the chat assistant
    pub chat_context_chars: usize,

    /// Style instruction for continuations when the caller gives none
    pub default_style: String,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            previous_context_chars: 1_000,
            current_context_chars: 500,
            max_input_chars: 15_000,
            outline_min_points: 5,
            outline_max_points: 8,
            continuation_min_words: 200,
            continuation_max_words: 300,
            chat_context_chars: 2_000,
            default_style: DEFAULT_STYLE.to_string(),
        }
    }
}

impl AssistConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.previous_context_chars == 0 || self.current_context_chars == 0 {
            return Err("continuation context lengths must be greater than 0".to_string());
        }
        if self.max_input_chars == 0 {
            return Err("max_input_chars must be greater than 0".to_string());
        }
        if self.outline_min_points == 0 {
            return Err("outline_min_points must be greater than 0".to_string());
        }
        if self.outline_min_points > self.outline_max_points {
            return Err("outline_min_points cannot exceed outline_max_points".to_string());
        }
        if self.continuation_min_words == 0
            || self.continuation_min_words > self.continuation_max_words
        {
            return Err("continuation word range must be non-empty and start above 0".to_string());
        }
        if self.default_style.trim().is_empty() {
            return Err("default_style cannot be blank".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
