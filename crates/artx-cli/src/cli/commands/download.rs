//! `artx download <url> <path>` – GET a URL into a file.

use anyhow::{Context, Result};
use artx_core::config::ArtxConfig;
use artx_core::TransferOptions;
use std::path::Path;

pub fn run_download(
    cfg: &ArtxConfig,
    url: &str,
    path: &Path,
    opts: &TransferOptions,
) -> Result<()> {
    let written = super::client(cfg)
        .download(url, path, opts)
        .with_context(|| format!("download {}", url))?;
    println!("Downloaded {} bytes to {}", written, path.display());
    Ok(())
}
