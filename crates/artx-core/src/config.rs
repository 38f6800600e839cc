use crate::requester::CurlOptions;
use crate::retry::{Backoff, RetryPolicy};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shape of the wait schedule between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffKind {
    #[default]
    Fixed,
    Exponential,
}

/// Retry parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per transfer, including the first.
    pub max_attempts: u32,
    /// Fixed wait, or the base of the exponential schedule.
    pub wait_secs: u64,
    #[serde(default)]
    pub backoff: BackoffKind,
    /// Cap for the exponential schedule.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
}

fn default_max_wait_secs() -> u64 {
    60
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            wait_secs: 5,
            backoff: BackoffKind::Fixed,
            max_wait_secs: default_max_wait_secs(),
        }
    }
}

/// Transport limits (optional `[curl]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurlConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for CurlConfig {
    fn default() -> Self {
        let d = CurlOptions::default();
        Self {
            connect_timeout_secs: d.connect_timeout.as_secs(),
            timeout_secs: d.timeout.as_secs(),
        }
    }
}

/// Global configuration loaded from `~/.config/artx/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtxConfig {
    /// Verify server certificates. Disable only for self-signed test remotes.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    #[serde(default)]
    pub curl: Option<CurlConfig>,
}

fn default_verify_tls() -> bool {
    true
}

impl Default for ArtxConfig {
    fn default() -> Self {
        Self {
            verify_tls: true,
            retry: None,
            curl: None,
        }
    }
}

impl ArtxConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        let r = self.retry.clone().unwrap_or_default();
        let backoff = match r.backoff {
            BackoffKind::Fixed => Backoff::Fixed { secs: r.wait_secs },
            BackoffKind::Exponential => Backoff::Exponential {
                base_secs: r.wait_secs,
                max_secs: r.max_wait_secs,
            },
        };
        RetryPolicy::new(r.max_attempts, backoff)
    }

    pub fn curl_options(&self) -> CurlOptions {
        let c = self.curl.clone().unwrap_or_default();
        CurlOptions {
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            timeout: Duration::from_secs(c.timeout_secs),
            ..CurlOptions::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(r) = &self.retry {
            if r.max_attempts == 0 {
                bail!("retry.max_attempts must be at least 1");
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("artx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ArtxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ArtxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<ArtxConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ArtxConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
