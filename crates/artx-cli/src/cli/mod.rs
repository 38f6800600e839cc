//! CLI for artx artifact transfers.

mod commands;

use anyhow::Result;
use artx_core::config::{self, ArtxConfig};
use artx_core::{Backoff, Credential, TransferOptions};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_checksum, run_download, run_upload};

/// Top-level CLI for artx.
#[derive(Debug, Parser)]
#[command(name = "artx")]
#[command(about = "artx: resilient artifact upload/download", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/artx/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload a local file with HTTP PUT.
    Upload {
        /// Destination URL.
        url: String,
        /// File to send.
        path: PathBuf,
        #[command(flatten)]
        transfer: TransferArgs,
    },

    /// Download a URL to a local file.
    Download {
        /// Source URL.
        url: String,
        /// Where to write the body.
        path: PathBuf,
        /// Expected SHA-256 (hex) of the body; the file is not written on mismatch.
        #[arg(long, value_name = "HEX")]
        sha256: Option<String>,
        #[command(flatten)]
        transfer: TransferArgs,
    },

    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

/// Flags shared by upload and download. Anything given here wins over config.
#[derive(Debug, Clone, Args)]
pub struct TransferArgs {
    /// Total attempts, including the first.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub retry: Option<u32>,

    /// Fixed wait between attempts, in seconds.
    #[arg(long, value_name = "SECS")]
    pub retry_wait: Option<u64>,

    /// Bearer token for the remote.
    #[arg(long, env = "ARTX_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Skip TLS certificate verification.
    #[arg(long)]
    pub insecure: bool,

    /// Extra request header, repeatable.
    #[arg(long = "header", value_name = "NAME: VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,
}

impl TransferArgs {
    pub fn to_options(&self, cfg: &ArtxConfig) -> TransferOptions {
        let mut retry = cfg.retry_policy();
        if let Some(n) = self.retry {
            retry.max_attempts = n;
        }
        if let Some(secs) = self.retry_wait {
            retry.backoff = Backoff::Fixed { secs };
        }
        TransferOptions {
            retry,
            credential: Credential::from_token(self.token.clone()),
            verify_tls: cfg.verify_tls && !self.insecure,
            headers: self.headers.clone(),
            expected_sha256: None,
        }
    }
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    match s.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected \"Name: value\", got {:?}", s)),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Upload {
                url,
                path,
                transfer,
            } => run_upload(&cfg, &url, &path, &transfer.to_options(&cfg))?,
            CliCommand::Download {
                url,
                path,
                sha256,
                transfer,
            } => {
                let mut opts = transfer.to_options(&cfg);
                opts.expected_sha256 = sha256;
                run_download(&cfg, &url, &path, &opts)?;
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
