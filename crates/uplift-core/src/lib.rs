pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod poll;
pub mod retry;
pub mod transport;

pub use client::{ClientConfig, FromUrlOutcome, UploadClient, UrlUploadOptions};
pub use error::UploadError;
