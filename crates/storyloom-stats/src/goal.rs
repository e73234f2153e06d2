//! Daily word target

use crate::StatsError;
use serde::{Deserialize, Serialize};

/// Goal used when the writer has not set one
pub const DEFAULT_DAILY_GOAL: u64 = 1_000;

/// A positive number of words to write per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct DailyGoal(u64);

impl DailyGoal {
    /// Create a goal, rejecting zero
    pub fn new(words: u64) -> Result<Self, StatsError> {
        if words == 0 {
            return Err(StatsError::InvalidGoal(words));
        }
        Ok(Self(words))
    }

    /// Target word count
    pub fn words(&self) -> u64 {
        self.0
    }
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self(DEFAULT_DAILY_GOAL)
    }
}

impl TryFrom<u64> for DailyGoal {
    type Error = StatsError;

    fn try_from(words: u64) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<DailyGoal> for u64 {
    fn from(goal: DailyGoal) -> Self {
        goal.0
    }
}

impl std::fmt::Display for DailyGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_goal_rejected() {
        assert_eq!(DailyGoal::new(0), Err(StatsError::InvalidGoal(0)));
        assert_eq!(DailyGoal::new(500).unwrap().words(), 500);
        assert_eq!(DailyGoal::default().words(), 1_000);
    }

    #[test]
    fn test_serde_validates() {
        let goal: DailyGoal = serde_json::from_str("750").unwrap();
        assert_eq!(goal.words(), 750);
        assert!(serde_json::from_str::<DailyGoal>("0").is_err());
    }
}
