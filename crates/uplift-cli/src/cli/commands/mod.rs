//! CLI command handlers. Each command is in its own file.

mod completions;
mod from_url;
mod status;
mod upload;

pub use completions::{run_completions, run_man};
pub use from_url::{run_from_url, FromUrlArgs};
pub use status::run_status;
pub use upload::run_upload;

use anyhow::Result;
use serde::Serialize;

/// Pretty-print a response as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
