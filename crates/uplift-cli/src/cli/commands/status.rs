//! `uplift status` – one status query for a from-URL token.

use anyhow::{Context, Result};
use uplift_core::client::UploadClient;
use uplift_core::poll::UploadToken;

use super::print_json;

pub fn run_status(client: &UploadClient, token: &str) -> Result<()> {
    let status = client
        .upload_status(&UploadToken::new(token))
        .with_context(|| format!("status query for token {token} failed"))?;
    print_json(&status)
}
