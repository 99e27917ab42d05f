//! Upload client: direct multipart uploads and from-URL uploads.
//!
//! Every request is wrapped in the throttle handler. A synchronous from-URL
//! upload hands its token to the poll loop and blocks until the job is
//! resolved.

mod classify;
mod options;
mod types;

pub use classify::{classify_response, parse_retry_after};
pub use options::{file_field, upload_params, UrlUploadOptions};
pub use types::{FromUrlOutcome, TokenResponse, UploadedFiles};

use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::error::UploadError;
use crate::poll::{self, JobState, PollPolicy, StatusResult, UploadToken};
use crate::retry::{self, RetryPolicy, Sleeper, ThreadSleeper};
use crate::transport::{CurlTransport, HttpResponse, Transport};

pub const DEFAULT_UPLOAD_BASE_URL: &str = "https://upload.uploadcare.com/";

/// Everything a client needs at call time. Passed in explicitly; nothing is
/// read from process-wide state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub public_key: String,
    /// Base of the upload API; endpoints are joined onto it.
    pub upload_base_url: String,
    pub retry: RetryPolicy,
    pub poll: PollPolicy,
    /// Wait used when a 429 carries no usable `Retry-After`.
    pub default_retry_after: Duration,
}

impl ClientConfig {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            upload_base_url: DEFAULT_UPLOAD_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
            poll: PollPolicy::default(),
            default_retry_after: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.upload_base_url = base.into();
        self
    }

    /// `path` joined under the base URL. A missing trailing slash on the base
    /// is added so the join does not replace its last segment.
    pub fn endpoint(&self, path: &str) -> Result<Url, UploadError> {
        let mut base = self.upload_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?.join(path)?)
    }
}

pub struct UploadClient<T = CurlTransport, S = ThreadSleeper> {
    config: ClientConfig,
    transport: T,
    sleeper: S,
}

impl UploadClient {
    /// Client over libcurl that blocks with `std::thread::sleep`.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, CurlTransport::default())
    }
}

impl<T: Transport> UploadClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self::with_parts(config, transport, ThreadSleeper)
    }
}

impl<T: Transport, S: Sleeper> UploadClient<T, S> {
    pub fn with_parts(config: ClientConfig, transport: T, sleeper: S) -> Self {
        Self {
            config,
            transport,
            sleeper,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Upload a single file. See [`UploadClient::upload_many`].
    pub fn upload_file(
        &self,
        path: impl AsRef<Path>,
        store: bool,
    ) -> Result<UploadedFiles, UploadError> {
        self.upload_many(&[path.as_ref()], store)
    }

    /// POST `base/` with every file as its own part, keyed by file name.
    pub fn upload_many<P: AsRef<Path>>(
        &self,
        paths: &[P],
        store: bool,
    ) -> Result<UploadedFiles, UploadError> {
        if paths.is_empty() {
            return Err(UploadError::NoFiles);
        }
        let mut fields = upload_params(&self.config.public_key, store);
        for path in paths {
            fields.push(file_field(path.as_ref())?);
        }
        let url = self.config.endpoint("base/")?;
        tracing::info!(files = paths.len(), store, "uploading files");
        self.request(|| self.transport.post_form(&url, &fields))
    }

    /// Upload a file the server fetches from `source_url`.
    ///
    /// With `options.async_` the token response is returned as-is. Otherwise
    /// blocks until the job resolves: `success` yields `Completed`, `error`
    /// yields `Failed`, both as `Ok`.
    pub fn upload_from_url(
        &self,
        source_url: &str,
        options: &UrlUploadOptions,
    ) -> Result<FromUrlOutcome, UploadError> {
        let fields = options.form_fields(&self.config.public_key, source_url);
        let url = self.config.endpoint("from_url/")?;
        tracing::info!(source_url, store = options.store, "uploading from URL");
        let response: TokenResponse = self.request(|| self.transport.post_form(&url, &fields))?;
        if options.async_ {
            return Ok(FromUrlOutcome::Token(response));
        }

        let token = response.token.ok_or_else(|| {
            UploadError::UnexpectedResponse(format!(
                "from_url returned {} without a token",
                response.kind.as_deref().unwrap_or("a response")
            ))
        })?;
        let status = self.wait_for_upload(&token)?;
        if status.state() == JobState::Error {
            tracing::warn!(token = %token, error = ?status.error_message(), "upload from URL failed");
            return Ok(FromUrlOutcome::Failed(status));
        }
        Ok(FromUrlOutcome::Completed {
            files: vec![status],
        })
    }

    /// One status query for a from-URL upload token.
    pub fn upload_status(&self, token: &UploadToken) -> Result<StatusResult, UploadError> {
        let url = self.config.endpoint("from_url/status/")?;
        self.request(|| self.transport.get(&url, &[("token", token.as_str())]))
    }

    /// Poll `token` until `success` or `error`.
    pub fn wait_for_upload(&self, token: &UploadToken) -> Result<StatusResult, UploadError> {
        poll::poll_until_terminal(&self.config.poll, &self.sleeper, || self.upload_status(token))
    }

    fn request<R, F>(&self, mut send: F) -> Result<R, UploadError>
    where
        R: DeserializeOwned,
        F: FnMut() -> Result<HttpResponse, UploadError>,
    {
        retry::run_with_retry(&self.config.retry, &self.sleeper, || {
            let resp = send()?;
            classify_response(&resp, self.config.default_retry_after)
        })
    }
}
