//! Turn raw HTTP responses into typed results or retry signals.

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::UploadError;
use crate::transport::HttpResponse;

/// Parse a `Retry-After` value given in (possibly fractional) seconds.
///
/// HTTP-date values, negative values and values too large for a `Duration`
/// are not understood and yield `None`.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let secs = value.trim().parse::<f64>().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}

/// 2xx: decode the body as `R`. 429: throttling signal. Anything else: HTTP error.
pub fn classify_response<R: DeserializeOwned>(
    resp: &HttpResponse,
    default_retry_after: Duration,
) -> Result<R, UploadError> {
    match resp.code {
        200..=299 => Ok(serde_json::from_slice(&resp.body)?),
        429 => {
            let retry_after = resp
                .header("retry-after")
                .and_then(parse_retry_after)
                .unwrap_or(default_retry_after);
            Err(UploadError::Throttled { retry_after })
        }
        code => Err(UploadError::Http {
            code,
            body: resp.body_text(),
        }),
    }
}
