//! `uplift upload` – upload local files.

use anyhow::{Context, Result};
use uplift_core::client::UploadClient;

use super::print_json;

pub fn run_upload(client: &UploadClient, paths: &[String], store: bool) -> Result<()> {
    let files = client
        .upload_many(paths, store)
        .with_context(|| format!("upload of {} file(s) failed", paths.len()))?;
    print_json(&files)
}
