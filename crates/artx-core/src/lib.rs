//! artx core: resilient single-file artifact transfers over HTTP.
//!
//! One call performs one upload or download, retrying failed attempts with
//! backoff and returning a typed error that says why the last attempt failed.

pub mod checksum;
pub mod config;
pub mod credential;
pub mod logging;
pub mod output;
pub mod request;
pub mod requester;
pub mod retry;
pub mod transfer;

pub use credential::Credential;
pub use output::{BufferOutput, OutputSink, StderrOutput, TracingOutput};
pub use request::{ResponseOutcome, TransferRequest, Verb};
pub use requester::{CurlOptions, CurlRequester, Requester, TransportFailure};
pub use retry::{Backoff, ErrorKind, RetryPolicy, TransferError};
pub use transfer::{Error, TransferClient, TransferOptions};
