//! CLI for the uplift upload client.

mod commands;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use uplift_core::client::UploadClient;
use uplift_core::config::{self, UpliftConfig};
use uplift_core::transport::CurlTransport;

use commands::{run_completions, run_from_url, run_man, run_status, run_upload, FromUrlArgs};

/// Top-level CLI for the uplift upload client.
#[derive(Debug, Parser)]
#[command(name = "uplift")]
#[command(about = "uplift: upload files and URLs to a remote file-upload API", long_about = None)]
pub struct Cli {
    /// Public key to use instead of the one in config.toml.
    #[arg(long, global = true, value_name = "KEY")]
    pub pub_key: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload one or more local files.
    Upload {
        /// Files to upload; each becomes a part keyed by its file name.
        #[arg(required = true)]
        paths: Vec<String>,
        /// Store the files permanently.
        #[arg(long)]
        store: bool,
    },

    /// Have the server fetch a file from a URL.
    FromUrl(FromUrlArgs),

    /// Query the status of a from-URL upload token once.
    Status {
        /// Token returned by `from-url --async`.
        token: String,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

/// Build a client from the config file, applying the `--pub-key` override.
fn build_client(mut cfg: UpliftConfig, pub_key: Option<String>) -> Result<UploadClient> {
    if let Some(key) = pub_key {
        cfg.public_key = key;
    }
    if cfg.public_key.trim().is_empty() {
        bail!("no public key: set public_key in the uplift config.toml or pass --pub-key");
    }
    let transport = CurlTransport::new(cfg.connect_timeout(), cfg.timeout());
    Ok(UploadClient::with_transport(cfg.client_config(), transport))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let client = build_client(cfg, cli.pub_key)?;

        match cli.command {
            CliCommand::Upload { paths, store } => run_upload(&client, &paths, store)?,
            CliCommand::FromUrl(args) => run_from_url(&client, &args)?,
            CliCommand::Status { token } => run_status(&client, &token)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
