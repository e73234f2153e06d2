//! Records returned by the adapters

use serde::{Deserialize, Serialize};
use storyloom_domain::{CharacterSketch, OutlinePoint};
use storyloom_llm::GroundingSource;

/// Characters and outline stages extracted in a single call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryElements {
    /// Main and notable supporting characters
    pub characters: Vec<CharacterSketch>,

    /// Key plot stages with tension scores
    pub outline_points: Vec<OutlinePoint>,
}

impl StoryElements {
    /// True when nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.outline_points.is_empty()
    }
}

/// Answer from the chat assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant text, or the fixed fallback when degraded
    pub text: String,

    /// Web sources the answer was grounded on
    pub sources: Vec<GroundingSource>,

    /// The backend could not be reached and `text` is the fallback
    pub degraded: bool,
}
