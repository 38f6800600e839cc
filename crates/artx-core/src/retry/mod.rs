//! Retry, classification and backoff.
//!
//! A transfer runs up to `max_attempts` attempts. Each response is judged by
//! [`validate`], failures are typed by [`classify_status`], and
//! [`run_with_retry`] logs and waits between non-terminal failures.

mod classify;
mod error;
mod policy;
mod run;
mod validate;

pub use classify::classify_status;
pub use error::{ErrorKind, TransferError};
pub use policy::{Backoff, RetryPolicy};
pub use run::{run_with_retry, run_with_retry_using};
pub use validate::validate;
