//! Typed failure of a single transfer attempt.

use thiserror::Error;

/// Closed classification of a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 401, or 403 without a usable token: the caller should log in.
    AuthenticationRequired,
    /// 403 with a token: the caller is known but not entitled.
    Forbidden,
    /// Any other 4xx.
    ClientError,
    /// Any 5xx.
    ServerError,
    /// The request never produced a status code (connect, DNS, TLS, ...).
    TransportError,
}

/// Failure of one attempt, carrying the message shown to the user.
///
/// `Display` prints the message only; the retry loop prefixes it with
/// `ERROR: ` when it logs a non-terminal failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("{0}")]
    AuthenticationRequired(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{message}")]
    Client { status: u32, message: String },
    #[error("{message}")]
    Server { status: u32, message: String },
    #[error("{0}")]
    Transport(String),
}

impl TransferError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransferError::AuthenticationRequired(_) => ErrorKind::AuthenticationRequired,
            TransferError::Forbidden(_) => ErrorKind::Forbidden,
            TransferError::Client { .. } => ErrorKind::ClientError,
            TransferError::Server { .. } => ErrorKind::ServerError,
            TransferError::Transport(_) => ErrorKind::TransportError,
        }
    }

    /// Status code for client/server errors. Authentication errors keep the
    /// body as their message and do not record which of 401/403 produced them.
    pub fn status(&self) -> Option<u32> {
        match self {
            TransferError::Client { status, .. } | TransferError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TransferError::AuthenticationRequired(m)
            | TransferError::Forbidden(m)
            | TransferError::Transport(m) => m,
            TransferError::Client { message, .. } | TransferError::Server { message, .. } => {
                message
            }
        }
    }
}
