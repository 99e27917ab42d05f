use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::{ClientConfig, DEFAULT_UPLOAD_BASE_URL};
use crate::poll::PollPolicy;
use crate::retry::RetryPolicy;

/// Throttle retry parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: u32,
    /// Wait in seconds when a 429 response has no usable `Retry-After`.
    pub default_retry_after_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            default_retry_after_secs: 10.0,
        }
    }
}

/// Status polling parameters (optional `[poll]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Wait between status queries in milliseconds.
    pub interval_ms: u64,
    /// Stop after this many queries; unset polls until the job resolves.
    #[serde(default)]
    pub max_polls: Option<u32>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            max_polls: None,
        }
    }
}

/// Global configuration loaded from `~/.config/uplift/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpliftConfig {
    /// Public key embedded in every upload request.
    pub public_key: String,
    /// Base URL of the upload API.
    pub upload_base_url: String,
    /// Connect timeout for each HTTP request.
    pub connect_timeout_secs: u64,
    /// Overall timeout for each HTTP request (file uploads included).
    pub timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Optional polling policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub poll: Option<PollConfig>,
}

impl Default for UpliftConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            upload_base_url: DEFAULT_UPLOAD_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 300,
            retry: None,
            poll: None,
        }
    }
}

impl UpliftConfig {
    /// Runtime client settings. Negative or non-finite retry waits fall back to 0.
    pub fn client_config(&self) -> ClientConfig {
        let retry = self.retry.clone().unwrap_or_default();
        let poll = self.poll.clone().unwrap_or_default();
        let default_retry_after = Duration::try_from_secs_f64(retry.default_retry_after_secs)
            .unwrap_or(Duration::ZERO);

        let mut cfg = ClientConfig::new(self.public_key.clone())
            .with_base_url(self.upload_base_url.clone());
        cfg.retry = RetryPolicy {
            max_attempts: retry.max_attempts,
        };
        cfg.poll = PollPolicy {
            interval: Duration::from_millis(poll.interval_ms),
            max_polls: poll.max_polls,
        };
        cfg.default_retry_after = default_retry_after;
        cfg
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uplift")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UpliftConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UpliftConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UpliftConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
