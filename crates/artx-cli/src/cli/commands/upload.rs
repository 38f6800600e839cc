//! `artx upload <url> <path>` – PUT a local file.

use anyhow::{Context, Result};
use artx_core::config::ArtxConfig;
use artx_core::TransferOptions;
use std::path::Path;

pub fn run_upload(cfg: &ArtxConfig, url: &str, path: &Path, opts: &TransferOptions) -> Result<()> {
    let resp = super::client(cfg)
        .upload(url, path, opts)
        .with_context(|| format!("upload {} to {}", path.display(), url))?;
    println!("Uploaded {} to {} (HTTP {})", path.display(), url, resp.status);
    Ok(())
}
