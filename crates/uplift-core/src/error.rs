//! Error type shared by the transport, the throttle handler and the client.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::poll::PollError;
use crate::retry::Retryable;

/// Everything an upload request can fail with.
///
/// Only [`UploadError::Throttled`] is retried; every other variant reaches
/// the caller unchanged.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Server answered 429; wait `retry_after` before trying again.
    #[error("throttled by server, retry after {retry_after:?}")]
    Throttled { retry_after: Duration },

    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    /// Building the multipart body failed.
    #[error("multipart form: {0}")]
    Form(#[from] curl::FormError),

    /// Non-2xx, non-429 response.
    #[error("HTTP {code}: {body}")]
    Http { code: u32, body: String },

    /// Response body was not the JSON we expected.
    #[error("decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Path has no usable file name to key the form part with.
    #[error("not an uploadable file: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("no files given to upload")]
    NoFiles,

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error(transparent)]
    Poll(#[from] PollError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl Retryable for UploadError {
    fn retry_after(&self) -> Option<Duration> {
        match self {
            UploadError::Throttled { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}
