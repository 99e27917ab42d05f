//! Status payloads returned by the from-URL status endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque handle for an in-flight from-URL upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadToken(String);

impl UploadToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Job state as reported in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Progress,
    Waiting,
    Success,
    Error,
    /// Any value the client does not know; polled like `pending`.
    Unknown,
}

impl JobState {
    pub fn from_status(status: &str) -> Self {
        match status {
            "pending" => JobState::Pending,
            "progress" => JobState::Progress,
            "waiting" => JobState::Waiting,
            "success" => JobState::Success,
            "error" => JobState::Error,
            _ => JobState::Unknown,
        }
    }

    /// Only `success` and `error` end a polling session.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Success | JobState::Error)
    }
}

/// One status response. `status` is kept verbatim; everything else the server
/// sent (file metadata on success, error details on failure) lives in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResult {
    pub status: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StatusResult {
    pub fn state(&self) -> JobState {
        JobState::from_status(&self.status)
    }

    pub fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }

    /// `error` field of a failed job, if the server sent one.
    pub fn error_message(&self) -> Option<&str> {
        self.fields.get("error").and_then(Value::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
