//! CLI command handlers, one file per command.

mod checksum;
mod download;
mod upload;

pub use checksum::run_checksum;
pub use download::run_download;
pub use upload::run_upload;

use artx_core::config::ArtxConfig;
use artx_core::{CurlRequester, StderrOutput, TransferClient};

/// Client with the configured curl limits; retry notices go to stderr.
fn client(cfg: &ArtxConfig) -> TransferClient<CurlRequester, StderrOutput> {
    TransferClient::new(CurlRequester::new(cfg.curl_options()), StderrOutput)
}
