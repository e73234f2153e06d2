//! Storyloom Stats
//!
//! Daily writing statistics: how many characters were added on each local
//! calendar day, and how that compares to the writer's goal.
//!
//! Only growth counts. Deleting text never lowers a day's total, and a
//! record only goes away when the whole ledger is reset.
//!
//! ```
//! use chrono::NaiveDate;
//! use storyloom_stats::{DailyGoal, WritingLedger};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let mut ledger = WritingLedger::new();
//! ledger.record_edit(day, "", "The tide came in.");
//! ledger.record_edit(day, "The tide came in.", "The tide");
//!
//! assert_eq!(ledger.word_count(day), 17);
//! assert!(!ledger.is_goal_met(day, DailyGoal::default()));
//! ```

#![warn(missing_docs)]

mod goal;
mod ledger;

pub use goal::{DailyGoal, DEFAULT_DAILY_GOAL};
pub use ledger::{edit_delta, today, DailyRecord, WritingLedger, DEFAULT_RECENT_DAYS};

use thiserror::Error;

/// Errors from the statistics crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A daily goal must be a positive number of words
    #[error("Invalid daily goal: {0} (must be greater than 0)")]
    InvalidGoal(u64),
}
