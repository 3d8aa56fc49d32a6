//! Bounded retry for embedding/completion calls.
//!
//! Attempts are capped, the wait before retry N is the N-th entry of a fixed
//! delay table, and only transient failures (timeout, connection reset,
//! configured HTTP statuses) are retried. Anything else, or the last failure
//! once the budget is spent, is returned unchanged.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::RetryConfig;
use crate::errors::{MnemoError, MnemoResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delays: Vec<Duration>,
    retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delays: Vec<Duration>, retryable_statuses: Vec<u16>) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delays,
            retryable_statuses,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            config
                .delays_ms
                .iter()
                .map(|ms| Duration::from_millis(*ms))
                .collect(),
            config.retryable_statuses.clone(),
        )
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self::new(1, Vec::new(), Vec::new())
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait before the given 1-based retry. The last table entry repeats.
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        let idx = retry.saturating_sub(1) as usize;
        self.delays
            .get(idx)
            .or_else(|| self.delays.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_retryable(&self, err: &MnemoError) -> bool {
        err.is_connection_failure()
            || err
                .upstream_status()
                .is_some_and(|s| self.retryable_statuses.contains(&s))
    }

    /// Run `op` under this policy, sleeping on the current thread between attempts.
    pub fn run<T, F>(&self, label: &str, op: F) -> MnemoResult<T>
    where
        F: FnMut(u32) -> MnemoResult<T>,
    {
        self.run_with_sleep(label, op, |delay| {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        })
    }

    /// Run `op` under this policy with a caller-provided sleep.
    ///
    /// `op` receives the 1-based attempt number.
    pub fn run_with_sleep<T, F, S>(&self, label: &str, mut op: F, mut sleep: S) -> MnemoResult<T>
    where
        F: FnMut(u32) -> MnemoResult<T>,
        S: FnMut(Duration),
    {
        let mut attempt = 1;
        loop {
            match op(attempt) {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(label, attempt, "call succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) if attempt < self.max_attempts && self.is_retryable(&err) => {
                    let delay = self.delay_before_retry(attempt);
                    warn!(
                        label,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient failure, retrying"
                    );
                    sleep(delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CompletionError, EmbeddingError};

    fn http(status: u16) -> MnemoError {
        EmbeddingError::HttpStatus {
            status,
            body: String::new(),
        }
        .into()
    }

    #[test]
    fn succeeds_on_third_attempt_with_two_retries() {
        let policy = RetryPolicy::default();
        let mut delays = Vec::new();
        let result = policy.run_with_sleep(
            "embed",
            |attempt| if attempt < 3 { Err(http(500)) } else { Ok(attempt) },
            |d| delays.push(d),
        );
        assert_eq!(result.unwrap(), 3);
        assert_eq!(
            delays,
            vec![Duration::from_millis(0), Duration::from_millis(200)]
        );
    }

    #[test]
    fn non_retryable_error_fails_immediately() {
        let policy = RetryPolicy::default();
        let mut calls = 0;
        let mut sleeps = 0;
        let result: MnemoResult<()> = policy.run_with_sleep(
            "complete",
            |_| {
                calls += 1;
                Err(http(400))
            },
            |_| sleeps += 1,
        );
        assert!(matches!(
            result,
            Err(MnemoError::EmbeddingError(EmbeddingError::HttpStatus { status: 400, .. }))
        ));
        assert_eq!(calls, 1);
        assert_eq!(sleeps, 0);
    }

    #[test]
    fn exhausted_budget_returns_last_error_unchanged() {
        let policy = RetryPolicy::default();
        let mut calls = 0;
        let result: MnemoResult<()> = policy.run_with_sleep(
            "complete",
            |_| {
                calls += 1;
                Err(CompletionError::Timeout.into())
            },
            |_| {},
        );
        assert_eq!(calls, 3);
        assert!(matches!(
            result,
            Err(MnemoError::CompletionError(CompletionError::Timeout))
        ));
    }

    #[test]
    fn retryable_set_is_fixed() {
        let policy = RetryPolicy::default();
        for status in [429, 500, 502, 503] {
            assert!(policy.is_retryable(&http(status)), "{status} should retry");
        }
        for status in [400, 401, 404, 504] {
            assert!(!policy.is_retryable(&http(status)), "{status} should not retry");
        }
        let reset: MnemoError = CompletionError::ConnectionReset {
            reason: "peer".into(),
        }
        .into();
        assert!(policy.is_retryable(&reset));
    }

    #[test]
    fn delay_table_repeats_last_entry() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before_retry(1), Duration::from_millis(0));
        assert_eq!(policy.delay_before_retry(2), Duration::from_millis(200));
        assert_eq!(policy.delay_before_retry(3), Duration::from_millis(500));
        assert_eq!(policy.delay_before_retry(7), Duration::from_millis(500));
    }

    #[test]
    fn none_policy_runs_once() {
        let mut calls = 0;
        let result: MnemoResult<()> = RetryPolicy::none().run_with_sleep(
            "x",
            |_| {
                calls += 1;
                Err(http(503))
            },
            |_| {},
        );
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
