//! Response types of the upload endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::poll::{StatusResult, UploadToken};

/// Direct upload response: form field name (the file name) to file UUID.
pub type UploadedFiles = BTreeMap<String, String>;

/// Raw response of the from-URL endpoint.
///
/// Usually `{"type": "token", "token": "..."}`; with duplicate checks enabled
/// the server may answer `type = "file_info"` with the existing file instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<UploadToken>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What `upload_from_url` hands back.
///
/// Serializes untagged, so `Completed` renders as `{"files": [...]}` and the
/// other variants render as the server payload itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FromUrlOutcome {
    /// `async` was requested: the raw token response, never polled.
    Token(TokenResponse),
    /// Polling ended in `success`.
    Completed { files: Vec<StatusResult> },
    /// Polling ended in `error`. Not a client-side failure.
    Failed(StatusResult),
}

impl FromUrlOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FromUrlOutcome::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_parses_type_and_token() {
        let r: TokenResponse =
            serde_json::from_str(r#"{"type":"token","token":"945ebb27"}"#).unwrap();
        assert_eq!(r.kind.as_deref(), Some("token"));
        assert_eq!(r.token.as_ref().map(UploadToken::as_str), Some("945ebb27"));
        assert!(r.extra.is_empty());
    }

    #[test]
    fn file_info_response_has_no_token() {
        let r: TokenResponse =
            serde_json::from_str(r#"{"type":"file_info","uuid":"u-1","filename":"a.png"}"#)
                .unwrap();
        assert!(r.token.is_none());
        assert_eq!(r.extra["uuid"], "u-1");
    }

    #[test]
    fn completed_serializes_as_files_list() {
        let s: StatusResult = serde_json::from_str(r#"{"status":"success","uuid":"u-1"}"#).unwrap();
        let v = serde_json::to_value(FromUrlOutcome::Completed { files: vec![s] }).unwrap();
        assert_eq!(v["files"][0]["status"], "success");
        assert_eq!(v["files"][0]["uuid"], "u-1");
    }

    #[test]
    fn failed_serializes_as_payload() {
        let s: StatusResult =
            serde_json::from_str(r#"{"status":"error","error":"timeout"}"#).unwrap();
        let v = serde_json::to_value(FromUrlOutcome::Failed(s)).unwrap();
        assert_eq!(v["status"], "error");
        assert_eq!(v["error"], "timeout");
    }
}
