//! Retry policy with exponential backoff and jitter

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of attempts (first try included)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

/// Default backoff base (milliseconds)
pub const DEFAULT_BASE_DELAY_MS: u64 = 1_000;

/// Default upper bound of the random jitter (milliseconds, exclusive)
pub const DEFAULT_MAX_JITTER_MS: u64 = 1_000;

/// How transient failures are retried
///
/// After the attempt numbered `n` (0-based) fails transiently, the client
/// waits `base_delay_ms * 2^n` plus a uniform jitter in `[0, max_jitter_ms)`.
///
/// # Examples
///
/// ```
/// use storyloom_llm::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_attempts, 4);
/// assert_eq!(policy.base_delay(0), Duration::from_secs(1));
/// assert_eq!(policy.base_delay(2), Duration::from_secs(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Backoff base (milliseconds)
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Jitter upper bound (milliseconds, exclusive); 0 disables jitter
    #[serde(default = "default_max_jitter_ms")]
    pub max_jitter_ms: u64,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_base_delay_ms() -> u64 {
    DEFAULT_BASE_DELAY_MS
}

fn default_max_jitter_ms() -> u64 {
    DEFAULT_MAX_JITTER_MS
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            max_jitter_ms: DEFAULT_MAX_JITTER_MS,
        }
    }
}

impl RetryPolicy {
    /// A policy that tries exactly once
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Set the attempt budget
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the backoff base
    pub fn with_base_delay_ms(mut self, base_delay_ms: u64) -> Self {
        self.base_delay_ms = base_delay_ms;
        self
    }

    /// Set the jitter bound
    pub fn with_max_jitter_ms(mut self, max_jitter_ms: u64) -> Self {
        self.max_jitter_ms = max_jitter_ms;
        self
    }

    /// Validate the policy
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }

    /// Exponential part of the delay after attempt `attempt` (0-based)
    pub fn base_delay(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }

    /// Full delay after attempt `attempt`: exponential part plus jitter
    pub fn delay(&self, attempt: u32) -> Duration {
        let jitter = if self.max_jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..self.max_jitter_ms)
        };
        self.base_delay(attempt) + Duration::from_millis(jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(RetryPolicy::default().validate().is_ok());
        assert!(RetryPolicy::no_retry().validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_is_invalid() {
        assert!(RetryPolicy::default().with_max_attempts(0).validate().is_err());
    }

    #[test]
    fn test_exponential_growth() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.base_delay(0), Duration::from_millis(1_000));
        assert_eq!(policy.base_delay(1), Duration::from_millis(2_000));
        assert_eq!(policy.base_delay(2), Duration::from_millis(4_000));
        assert_eq!(policy.base_delay(3), Duration::from_millis(8_000));
    }

    #[test]
    fn test_base_delay_saturates() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.base_delay(80), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_jitter_stays_in_bounds() {
        let policy = RetryPolicy::default();
        for attempt in 0..3 {
            for _ in 0..50 {
                let delay = policy.delay(attempt);
                assert!(delay >= policy.base_delay(attempt));
                assert!(delay < policy.base_delay(attempt) + Duration::from_millis(1_000));
            }
        }
    }

    #[test]
    fn test_no_jitter() {
        let policy = RetryPolicy::default().with_max_jitter_ms(0);
        assert_eq!(policy.delay(1), Duration::from_millis(2_000));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let policy: RetryPolicy = serde_json::from_str(r#"{"max_attempts": 5}"#).unwrap();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay_ms, DEFAULT_BASE_DELAY_MS);
        assert_eq!(policy.max_jitter_ms, DEFAULT_MAX_JITTER_MS);
    }
}
