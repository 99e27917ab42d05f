use std::time::Duration;

use super::Retryable;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Hand this error to the caller.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Attempt budget for throttled requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first). 0 behaves like 1.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 5 }
    }
}

impl RetryPolicy {
    /// Decide what to do after `attempt` (1-based) failed with `err`.
    ///
    /// The last attempt is never retried, so its error is returned as-is.
    pub fn decide<E: Retryable + ?Sized>(&self, attempt: u32, err: &E) -> RetryDecision {
        if attempt >= self.max_attempts.max(1) {
            return RetryDecision::NoRetry;
        }
        match err.retry_after() {
            Some(wait) => RetryDecision::RetryAfter(wait),
            None => RetryDecision::NoRetry,
        }
    }
}
