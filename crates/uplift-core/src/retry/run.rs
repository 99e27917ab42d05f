//! Retry loop: run a closure until success, a fatal error, or the budget runs out.

use super::policy::{RetryDecision, RetryPolicy};
use super::sleep::Sleeper;
use super::Retryable;

/// Runs `op` until it succeeds or the retry policy says to stop.
///
/// On a throttled failure, sleeps for the wait carried by the error and tries
/// again. Fatal errors and the error of the final attempt are returned as-is.
pub fn run_with_retry<T, E, S, F>(policy: &RetryPolicy, sleeper: &S, mut op: F) -> Result<T, E>
where
    E: Retryable + std::fmt::Display,
    S: Sleeper + ?Sized,
    F: FnMut() -> Result<T, E>,
{
    let mut attempt = 1u32;
    loop {
        match op() {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(attempt, &e) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(d) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = policy.max_attempts,
                        wait = ?d,
                        "{}; retrying",
                        e
                    );
                    sleeper.sleep(d);
                    attempt += 1;
                }
            },
        }
    }
}
