//! Per-day writing ledger

use crate::goal::DailyGoal;
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Window shown by the dashboard calendar
pub const DEFAULT_RECENT_DAYS: usize = 14;

/// Characters added by an edit
///
/// Counts characters, not bytes. Shrinking edits contribute zero.
///
/// ```
/// use storyloom_stats::edit_delta;
/// assert_eq!(edit_delta("", "你好"), 2);
/// assert_eq!(edit_delta("hello", "he"), 0);
/// ```
pub fn edit_delta(old: &str, new: &str) -> u64 {
    let old = old.chars().count() as u64;
    let new = new.chars().count() as u64;
    new.saturating_sub(old)
}

/// The local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Words written on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// Local calendar day
    pub date: NaiveDate,

    /// Words added that day
    pub word_count: u64,
}

/// Accumulated writing per calendar day
///
/// Every operation keeps each day's count monotonically non-decreasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WritingLedger {
    days: BTreeMap<NaiveDate, u64>,
}

impl WritingLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `words` to `date`; zero and negative deltas are ignored
    pub fn record_delta(&mut self, date: NaiveDate, words: i64) {
        if words <= 0 {
            return;
        }
        let entry = self.days.entry(date).or_insert(0);
        *entry = entry.saturating_add(words as u64);
        debug!(%date, added = words, total = *entry, "Recorded writing");
    }

    /// Record the growth from `old` to `new` and return it
    pub fn record_edit(&mut self, date: NaiveDate, old: &str, new: &str) -> u64 {
        let delta = edit_delta(old, new);
        self.record_delta(date, i64::try_from(delta).unwrap_or(i64::MAX));
        delta
    }

    /// Words written on `date`, zero when nothing was recorded
    pub fn word_count(&self, date: NaiveDate) -> u64 {
        self.days.get(&date).copied().unwrap_or(0)
    }

    /// Whether `date` reached `goal`
    pub fn is_goal_met(&self, date: NaiveDate, goal: DailyGoal) -> bool {
        self.word_count(date) >= goal.words()
    }

    /// Fraction of `goal` reached on `date`, capped at 1.0
    pub fn progress(&self, date: NaiveDate, goal: DailyGoal) -> f64 {
        (self.word_count(date) as f64 / goal.words() as f64).min(1.0)
    }

    /// The `n` days ending at `today`, oldest first, with unrecorded days as zero
    pub fn recent_days(&self, today: NaiveDate, n: usize) -> Vec<DailyRecord> {
        (0..n as u64)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
            .map(|date| DailyRecord {
                date,
                word_count: self.word_count(date),
            })
            .collect()
    }

    /// Every recorded day, oldest first
    pub fn records(&self) -> Vec<DailyRecord> {
        self.days
            .iter()
            .map(|(&date, &word_count)| DailyRecord { date, word_count })
            .collect()
    }

    /// Words across all days
    pub fn total_words(&self) -> u64 {
        self.days.values().fold(0, |acc, &w| acc.saturating_add(w))
    }

    /// Days that met `goal`
    pub fn days_goal_met(&self, goal: DailyGoal) -> usize {
        self.days.values().filter(|&&w| w >= goal.words()).count()
    }

    /// Whether anything was ever recorded
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Clear every record
    pub fn reset(&mut self) {
        self.days.clear();
    }

    /// Generate a summary report
    pub fn summary(&self, today: NaiveDate, goal: DailyGoal) -> String {
        let mut lines = vec![
            "Writing Summary".to_string(),
            "===============".to_string(),
            format!(
                "Today: {} / {} ({:.0}%)",
                self.word_count(today),
                goal,
                self.progress(today, goal) * 100.0
            ),
            format!("Total: {}", self.total_words()),
            format!("Days recorded: {}", self.days.len()),
            format!("Days at goal: {}", self.days_goal_met(goal)),
        ];

        let recent: Vec<_> = self
            .recent_days(today, DEFAULT_RECENT_DAYS)
            .into_iter()
            .filter(|r| r.word_count > 0)
            .collect();
        if !recent.is_empty() {
            lines.push(String::new());
            lines.push(format!("Last {} days:", DEFAULT_RECENT_DAYS));
            for record in recent {
                let mark = if record.word_count >= goal.words() { " *" } else { "" };
                lines.push(format!("  {}: {}{}", record.date, record.word_count, mark));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_edit_delta() {
        assert_eq!(edit_delta("", "abc"), 3);
        assert_eq!(edit_delta("abc", "abcdef"), 3);
        assert_eq!(edit_delta("abcdef", "abc"), 0);
        assert_eq!(edit_delta("字字", "字字字字"), 2);
    }

    #[test]
    fn test_deltas_accumulate() {
        let mut ledger = WritingLedger::new();
        ledger.record_delta(day(1), 300);
        ledger.record_delta(day(1), 200);
        assert_eq!(ledger.word_count(day(1)), 500);
    }

    #[test]
    fn test_non_positive_delta_is_ignored() {
        let mut ledger = WritingLedger::new();
        ledger.record_delta(day(1), 0);
        ledger.record_delta(day(1), -40);
        assert!(ledger.is_empty());
        assert_eq!(ledger.word_count(day(1)), 0);
    }

    #[test]
    fn test_record_edit_counts_growth_only() {
        let mut ledger = WritingLedger::new();
        assert_eq!(ledger.record_edit(day(2), "", "Hello"), 5);
        assert_eq!(ledger.record_edit(day(2), "Hello", "Hel"), 0);
        assert_eq!(ledger.record_edit(day(2), "Hel", "Hello, world"), 9);
        assert_eq!(ledger.word_count(day(2)), 14);
    }

    #[test]
    fn test_goal_met_at_equality() {
        let mut ledger = WritingLedger::new();
        let goal = DailyGoal::default();
        ledger.record_delta(day(3), 999);
        assert!(!ledger.is_goal_met(day(3), goal));
        ledger.record_delta(day(3), 1);
        assert!(ledger.is_goal_met(day(3), goal));
    }

    #[test]
    fn test_progress_is_capped() {
        let mut ledger = WritingLedger::new();
        let goal = DailyGoal::new(200).unwrap();
        ledger.record_delta(day(4), 50);
        assert!((ledger.progress(day(4), goal) - 0.25).abs() < f64::EPSILON);
        ledger.record_delta(day(4), 1_000);
        assert_eq!(ledger.progress(day(4), goal), 1.0);
    }

    #[test]
    fn test_recent_days_zero_fill() {
        let mut ledger = WritingLedger::new();
        ledger.record_delta(day(1), 10);
        ledger.record_delta(day(3), 30);

        let window = ledger.recent_days(day(4), 5);

        assert_eq!(window.len(), 5);
        assert_eq!(window[0].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(window[4].date, day(4));
        let counts: Vec<u64> = window.iter().map(|r| r.word_count).collect();
        assert_eq!(counts, vec![0, 10, 0, 30, 0]);
    }

    #[test]
    fn test_reset_and_totals() {
        let mut ledger = WritingLedger::new();
        ledger.record_delta(day(1), 1_200);
        ledger.record_delta(day(2), 300);
        assert_eq!(ledger.total_words(), 1_500);
        assert_eq!(ledger.days_goal_met(DailyGoal::default()), 1);

        ledger.reset();
        assert_eq!(ledger.total_words(), 0);
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn test_total_words_saturates() {
        let mut ledger = WritingLedger::new();
        for d in 1..=3 {
            ledger.record_delta(day(d), i64::MAX);
        }
        assert_eq!(ledger.total_words(), u64::MAX);
    }

    #[test]
    fn test_summary() {
        let mut ledger = WritingLedger::new();
        ledger.record_delta(day(5), 1_000);
        let summary = ledger.summary(day(5), DailyGoal::default());
        assert!(summary.contains("Today: 1000 / 1000 (100%)"));
        assert!(summary.contains("2024-03-05: 1000 *"));
    }

    #[test]
    fn test_json_shape() {
        let mut ledger = WritingLedger::new();
        ledger.record_delta(day(1), 42);
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"2024-03-01":42}"#);
        let parsed: WritingLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ledger);
    }

    proptest! {
        #[test]
        fn prop_daily_count_never_decreases(deltas in prop::collection::vec(-500i64..500, 0..50)) {
            let mut ledger = WritingLedger::new();
            let mut previous = 0;
            for delta in deltas {
                ledger.record_delta(day(1), delta);
                let now = ledger.word_count(day(1));
                prop_assert!(now >= previous);
                previous = now;
            }
        }

        #[test]
        fn prop_edits_never_decrease(texts in prop::collection::vec(".{0,40}", 1..20)) {
            let mut ledger = WritingLedger::new();
            let mut old = String::new();
            let mut previous = 0;
            for text in texts {
                ledger.record_edit(day(1), &old, &text);
                let now = ledger.word_count(day(1));
                prop_assert!(now >= previous);
                previous = now;
                old = text;
            }
        }
    }
}
