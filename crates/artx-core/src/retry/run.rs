//! Retry loop: run an attempt until success or the attempt budget is spent.

use super::error::TransferError;
use super::policy::RetryPolicy;
use crate::output::OutputSink;
use std::time::Duration;

/// Runs `f` (given the 0-based attempt index) until it succeeds or the policy
/// runs out of attempts, sleeping on the current thread between attempts.
pub fn run_with_retry<T, F>(
    policy: &RetryPolicy,
    output: &dyn OutputSink,
    f: F,
) -> Result<T, TransferError>
where
    F: FnMut(u32) -> Result<T, TransferError>,
{
    run_with_retry_using(policy, output, std::thread::sleep, f)
}

/// Same as [`run_with_retry`] with an explicit sleep function.
///
/// Every failure except the last writes `ERROR: <message>` followed by
/// `Waiting <n> seconds to retry...` to `output`, then waits. The last
/// failure is returned unchanged and writes nothing. Success writes nothing.
pub fn run_with_retry_using<T, F, S>(
    policy: &RetryPolicy,
    output: &dyn OutputSink,
    sleep: S,
    mut f: F,
) -> Result<T, TransferError>
where
    F: FnMut(u32) -> Result<T, TransferError>,
    S: Fn(Duration),
{
    let mut attempt = 0u32;
    loop {
        match f(attempt) {
            Ok(value) => return Ok(value),
            Err(e) => match policy.wait_after(attempt) {
                None => return Err(e),
                Some(secs) => {
                    tracing::debug!(
                        attempt = attempt + 1,
                        max_attempts = policy.attempts(),
                        kind = ?e.kind(),
                        wait_secs = secs,
                        "attempt failed, retrying"
                    );
                    output.write_line(&format!("ERROR: {}", e));
                    output.write_line(&format!("Waiting {} seconds to retry...", secs));
                    sleep(Duration::from_secs(secs));
                    attempt += 1;
                }
            },
        }
    }
}
