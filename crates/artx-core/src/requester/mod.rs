//! Transport collaborator: one raw HTTP exchange per call.

mod libcurl;

pub use libcurl::{CurlOptions, CurlRequester};

use crate::request::{ResponseOutcome, TransferRequest};
use thiserror::Error;

/// The attempt could not complete at the transport level, so there is no
/// status code. The message is shown to the user unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<curl::Error> for TransportFailure {
    fn from(e: curl::Error) -> Self {
        Self(e.to_string())
    }
}

/// Performs exactly one attempt of a request. Retries, classification and
/// waiting are the caller's business.
pub trait Requester {
    fn attempt(&self, request: &TransferRequest) -> Result<ResponseOutcome, TransportFailure>;
}

impl<R: Requester + ?Sized> Requester for &R {
    fn attempt(&self, request: &TransferRequest) -> Result<ResponseOutcome, TransportFailure> {
        (**self).attempt(request)
    }
}
