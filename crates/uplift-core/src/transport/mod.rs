//! HTTP transport used by the upload client.
//!
//! The client only needs two verbs: a multipart form POST and a GET with query
//! parameters. [`CurlTransport`] implements them with libcurl; tests swap in
//! scripted transports.

mod easy;
mod parse;

pub use easy::CurlTransport;
pub use parse::parse_headers;

use std::path::PathBuf;
use url::Url;

use crate::error::UploadError;

/// One part of a multipart form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: String, value: String },
    /// File read from disk; the part's filename is the path's file name.
    File { name: String, path: PathBuf },
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormField::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

/// Raw response: status code, header lines split into (name, value), body bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub code: u32,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First header with this name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Blocking HTTP capability the client issues requests through.
pub trait Transport {
    fn post_form(&self, url: &Url, fields: &[FormField]) -> Result<HttpResponse, UploadError>;

    fn get(&self, url: &Url, query: &[(&str, &str)]) -> Result<HttpResponse, UploadError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, url: &Url, fields: &[FormField]) -> Result<HttpResponse, UploadError> {
        (**self).post_form(url, fields)
    }

    fn get(&self, url: &Url, query: &[(&str, &str)]) -> Result<HttpResponse, UploadError> {
        (**self).get(url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = HttpResponse {
            code: 429,
            headers: vec![("Retry-After".into(), "12".into())],
            body: Vec::new(),
        };
        assert_eq!(resp.header("retry-after"), Some("12"));
        assert_eq!(resp.header("content-type"), None);
    }

    #[test]
    fn form_field_name() {
        assert_eq!(FormField::text("pub_key", "demo").name(), "pub_key");
        let f = FormField::File {
            name: "a.txt".into(),
            path: PathBuf::from("/tmp/a.txt"),
        };
        assert_eq!(f.name(), "a.txt");
    }
}
