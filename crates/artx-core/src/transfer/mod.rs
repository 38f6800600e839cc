//! Upload/download entry points.
//!
//! A [`TransferClient`] pairs a [`Requester`] with an [`OutputSink`] and runs
//! every call through the retry loop. Reading the upload source and writing
//! the download destination happen outside the loop.

mod error;

pub use error::Error;

use crate::checksum;
use crate::credential::Credential;
use crate::output::OutputSink;
use crate::request::{ResponseOutcome, TransferRequest, Verb};
use crate::requester::Requester;
use crate::retry::{run_with_retry_using, validate, RetryPolicy, TransferError};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Per-call settings.
#[derive(Debug, Clone)]
pub struct TransferOptions {
    pub retry: RetryPolicy,
    pub credential: Credential,
    /// Handed to the requester as-is.
    pub verify_tls: bool,
    pub headers: Vec<(String, String)>,
    /// Lowercase or uppercase hex SHA-256 the downloaded body must match.
    pub expected_sha256: Option<String>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            credential: Credential::Anonymous,
            verify_tls: true,
            headers: Vec::new(),
            expected_sha256: None,
        }
    }
}

pub struct TransferClient<R, O> {
    requester: R,
    output: O,
    sleep: fn(Duration),
}

impl<R: Requester, O: OutputSink> TransferClient<R, O> {
    pub fn new(requester: R, output: O) -> Self {
        Self {
            requester,
            output,
            sleep: std::thread::sleep,
        }
    }

    /// Replace the function used to wait between attempts.
    pub fn with_sleep(mut self, sleep: fn(Duration)) -> Self {
        self.sleep = sleep;
        self
    }

    /// PUT the contents of `path` to `url`. Returns the accepted response.
    pub fn upload(
        &self,
        url: &str,
        path: &Path,
        opts: &TransferOptions,
    ) -> Result<ResponseOutcome, Error> {
        let payload = fs::read(path).map_err(|source| Error::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        let request = build_request(Verb::Put, url, Some(payload), opts);
        Ok(self.run(&request, &opts.retry)?)
    }

    /// GET `url` into `path`, creating parent directories. Returns bytes written.
    ///
    /// The file is only written after the body has passed the checksum check.
    pub fn download(&self, url: &str, path: &Path, opts: &TransferOptions) -> Result<u64, Error> {
        let body = self.fetch(url, opts)?;
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &body)
        };
        write().map_err(|source| Error::WriteDestination {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(url, path = %path.display(), bytes = body.len(), "download saved");
        Ok(body.len() as u64)
    }

    /// GET `url` and return the body without touching disk.
    pub fn fetch(&self, url: &str, opts: &TransferOptions) -> Result<Vec<u8>, Error> {
        let request = build_request(Verb::Get, url, None, opts);
        let outcome = self.run(&request, &opts.retry)?;
        if let Some(expected) = &opts.expected_sha256 {
            let actual = checksum::sha256_bytes(&outcome.body);
            if !checksum::digest_matches(expected, &actual) {
                return Err(Error::ChecksumMismatch {
                    url: url.to_string(),
                    expected: expected.clone(),
                    actual,
                });
            }
        }
        Ok(outcome.body)
    }

    fn run(
        &self,
        request: &TransferRequest,
        policy: &RetryPolicy,
    ) -> Result<ResponseOutcome, TransferError> {
        let started = Instant::now();
        let res = run_with_retry_using(policy, &self.output, self.sleep, |attempt| {
            tracing::debug!(verb = %request.verb, url = %request.url, attempt = attempt + 1, "attempt");
            let outcome = self
                .requester
                .attempt(request)
                .map_err(|e| TransferError::Transport(e.0))?;
            validate(&outcome, &request.credential)?;
            Ok(outcome)
        });
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &res {
            Ok(outcome) => tracing::info!(
                verb = %request.verb,
                url = %request.url,
                status = outcome.status,
                elapsed_ms,
                "transfer complete"
            ),
            Err(e) => tracing::error!(
                verb = %request.verb,
                url = %request.url,
                kind = ?e.kind(),
                "transfer failed: {}",
                e
            ),
        }
        res
    }
}

fn build_request(
    verb: Verb,
    url: &str,
    payload: Option<Vec<u8>>,
    opts: &TransferOptions,
) -> TransferRequest {
    let base = match (verb, payload) {
        (Verb::Put, payload) => TransferRequest::put(url, payload.unwrap_or_default()),
        (Verb::Get, _) => TransferRequest::get(url),
    };
    TransferRequest {
        headers: opts.headers.clone(),
        credential: opts.credential.clone(),
        verify_tls: opts.verify_tls,
        ..base
    }
}
