//! Blocking libcurl requester: one `Easy` handle per attempt.

use super::{Requester, TransportFailure};
use crate::request::{ResponseOutcome, TransferRequest, Verb};
use curl::easy::{Easy, List, SeekResult};
use std::cell::Cell;
use std::io::SeekFrom;
use std::time::Duration;

/// Per-attempt transport limits.
#[derive(Debug, Clone, Copy)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    /// Upper bound on the whole exchange.
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(3600),
            max_redirections: 10,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurlRequester {
    opts: CurlOptions,
}

impl CurlRequester {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }
}

impl Requester for CurlRequester {
    fn attempt(&self, request: &TransferRequest) -> Result<ResponseOutcome, TransportFailure> {
        let mut body = Vec::new();
        let payload: &[u8] = request.payload.as_deref().unwrap_or(&[]);

        let mut easy = Easy::new();
        easy.url(&request.url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.opts.max_redirections)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        easy.timeout(self.opts.timeout)?;
        easy.low_speed_limit(1024)?;
        easy.low_speed_time(Duration::from_secs(60))?;
        easy.ssl_verify_peer(request.verify_tls)?;
        easy.ssl_verify_host(request.verify_tls)?;

        let mut list = List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if let Some(token) = request.credential.token() {
            list.append(&format!("Authorization: Bearer {}", token))?;
        }
        if request.verb == Verb::Put {
            easy.upload(true)?;
            easy.in_filesize(payload.len() as u64)?;
            // Send the body straight away instead of waiting for 100-continue.
            list.append("Expect:")?;
        }
        easy.http_headers(list)?;

        tracing::trace!(verb = %request.verb, url = %request.url, bytes = payload.len(), "curl perform");
        {
            // Shared by the read and seek callbacks so a redirected PUT can
            // rewind and resend the body.
            let sent = Cell::new(0usize);
            let mut transfer = easy.transfer();
            if request.verb == Verb::Put {
                transfer.read_function(|buf| {
                    let remaining = &payload[sent.get()..];
                    let n = remaining.len().min(buf.len());
                    buf[..n].copy_from_slice(&remaining[..n]);
                    sent.set(sent.get() + n);
                    Ok(n)
                })?;
                transfer.seek_function(|pos| match pos {
                    SeekFrom::Start(off) if off <= payload.len() as u64 => {
                        sent.set(off as usize);
                        SeekResult::Ok
                    }
                    SeekFrom::Start(_) => SeekResult::Fail,
                    _ => SeekResult::CantSeek,
                })?;
            }
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(ResponseOutcome { status, body })
    }
}
