//! Poll loop for asynchronous from-URL uploads.
//!
//! Queries the status endpoint until the job reaches `success` or `error`,
//! sleeping a fixed interval between queries. Unbounded unless
//! [`PollPolicy::max_polls`] is set.

mod status;

pub use status::{JobState, StatusResult, UploadToken};

use std::time::Duration;

use thiserror::Error;

use crate::retry::Sleeper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Wait between two status queries.
    pub interval: Duration,
    /// Give up after this many queries without a terminal status.
    /// `None` polls until the server resolves the job. `Some(0)` behaves like
    /// `Some(1)`: the first query always runs.
    pub max_polls: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            max_polls: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("upload still {last_status:?} after {polls} status queries")]
    Exhausted { polls: u32, last_status: String },
}

/// Calls `fetch` until it returns a terminal status and returns that payload.
///
/// A terminal `error` status is a normal return, not a failure. Errors from
/// `fetch` propagate immediately.
pub fn poll_until_terminal<S, F, E>(
    policy: &PollPolicy,
    sleeper: &S,
    mut fetch: F,
) -> Result<StatusResult, E>
where
    S: Sleeper + ?Sized,
    F: FnMut() -> Result<StatusResult, E>,
    E: From<PollError>,
{
    let mut polls = 0u32;
    loop {
        let status = fetch()?;
        polls += 1;
        if status.is_terminal() {
            tracing::debug!(polls, status = %status.status, "upload reached terminal state");
            return Ok(status);
        }
        if let Some(max) = policy.max_polls {
            if polls >= max {
                return Err(PollError::Exhausted {
                    polls,
                    last_status: status.status,
                }
                .into());
            }
        }
        tracing::debug!(polls, status = %status.status, "upload not finished; polling again");
        sleeper.sleep(policy.interval);
    }
}
