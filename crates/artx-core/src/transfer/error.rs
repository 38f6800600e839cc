//! Errors returned by the transfer entry points.

use crate::retry::{ErrorKind, TransferError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failure of an upload or download.
///
/// Only [`Error::Transfer`] comes out of the retry loop; the other variants
/// are local problems and are never retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error("failed to read {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("checksum mismatch for {url}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        url: String,
        expected: String,
        actual: String,
    },
}

impl Error {
    /// Classification of the remote failure, if this is one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Transfer(e) => Some(e.kind()),
            _ => None,
        }
    }
}
