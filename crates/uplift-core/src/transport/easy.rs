//! libcurl transport: one `Easy` handle per request.

use std::str;
use std::time::Duration;

use curl::easy::{Easy, Form, List};
use url::Url;

use super::{parse, FormField, HttpResponse, Transport};
use crate::error::UploadError;

/// Blocking transport built on the curl crate.
///
/// Runs in the current thread. Redirects are not followed; the upload API
/// answers directly.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(15), Duration::from_secs(300))
    }
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    fn handle(&self, url: &str) -> Result<Easy, UploadError> {
        let mut easy = Easy::new();
        easy.url(url)?;
        easy.follow_location(false)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(concat!("uplift/", env!("CARGO_PKG_VERSION")))?;

        // Empty `Expect:` stops curl from waiting on 100-continue for larger bodies.
        let mut list = List::new();
        list.append("Expect:")?;
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;
        Ok(easy)
    }

    fn perform(mut easy: Easy) -> Result<HttpResponse, UploadError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok(HttpResponse {
            code,
            headers: parse::parse_headers(&header_lines),
            body,
        })
    }
}

impl Transport for CurlTransport {
    fn post_form(&self, url: &Url, fields: &[FormField]) -> Result<HttpResponse, UploadError> {
        let mut easy = self.handle(url.as_str())?;

        let mut form = Form::new();
        for field in fields {
            match field {
                FormField::Text { name, value } => {
                    form.part(name).contents(value.as_bytes()).add()?;
                }
                FormField::File { name, path } => {
                    let filename = path
                        .file_name()
                        .ok_or_else(|| UploadError::InvalidPath(path.clone()))?;
                    form.part(name).file(path).filename(filename).add()?;
                }
            }
        }
        easy.httppost(form)?;

        tracing::debug!(url = %url, parts = fields.len(), "POST multipart");
        Self::perform(easy)
    }

    fn get(&self, url: &Url, query: &[(&str, &str)]) -> Result<HttpResponse, UploadError> {
        let mut url = url.clone();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        let mut easy = self.handle(url.as_str())?;
        easy.get(true)?;

        tracing::debug!(url = %url, "GET");
        Self::perform(easy)
    }
}
