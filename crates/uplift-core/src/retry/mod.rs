//! Throttle retry.
//!
//! A bounded-retry combinator: an attempt budget, a predicate telling
//! throttling apart from fatal failures, and the wait the server asked for
//! taken from the throttling failure itself.

mod policy;
mod run;
mod sleep;

pub use policy::{RetryDecision, RetryPolicy};
pub use run::run_with_retry;
pub use sleep::{Sleeper, ThreadSleeper};

use std::time::Duration;

/// Errors that may carry a server-requested wait.
pub trait Retryable {
    /// `Some(wait)` when the failure is a throttling signal worth retrying
    /// after `wait`; `None` for anything that must propagate immediately.
    fn retry_after(&self) -> Option<Duration>;
}
