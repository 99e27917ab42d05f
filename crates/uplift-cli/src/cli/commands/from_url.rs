//! `uplift from-url` – server-side fetch of a remote file.

use anyhow::{Context, Result};
use clap::Args;
use uplift_core::client::{FromUrlOutcome, UploadClient, UrlUploadOptions};

use super::print_json;

#[derive(Debug, Clone, Args)]
pub struct FromUrlArgs {
    /// Source URL the server should fetch.
    pub url: String,
    /// Store the file permanently.
    #[arg(long)]
    pub store: bool,
    /// Print the upload token instead of waiting for the upload to finish.
    #[arg(long = "async")]
    pub async_: bool,
    /// File name to store the upload under.
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,
    /// Reuse a file previously uploaded from the same URL (`--check-duplicates=false` sends "0").
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub check_duplicates: Option<bool>,
    /// Remember this URL for later duplicate checks (`--save-duplicates=false` sends "0").
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub save_duplicates: Option<bool>,
}

impl FromUrlArgs {
    pub fn options(&self) -> UrlUploadOptions {
        UrlUploadOptions {
            store: self.store,
            async_: self.async_,
            check_url_duplicates: self.check_duplicates,
            save_url_duplicates: self.save_duplicates,
            filename: self.filename.clone(),
        }
    }
}

pub fn run_from_url(client: &UploadClient, args: &FromUrlArgs) -> Result<()> {
    let outcome = client
        .upload_from_url(&args.url, &args.options())
        .with_context(|| format!("upload from {} failed", args.url))?;
    if let FromUrlOutcome::Failed(status) = &outcome {
        tracing::warn!(
            "server could not fetch {}: {}",
            args.url,
            status.error_message().unwrap_or("unknown error")
        );
    }
    print_json(&outcome)
}
