//! Per-call request and per-attempt response types.

use crate::credential::Credential;
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Put,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Get => f.write_str("GET"),
            Verb::Put => f.write_str("PUT"),
        }
    }
}

/// Everything a requester needs for one attempt. Built once per transfer and
/// reused unchanged for every retry.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub verb: Verb,
    pub url: String,
    /// Body sent with PUT; `None` for GET.
    pub payload: Option<Vec<u8>>,
    /// Extra request headers as (name, value).
    pub headers: Vec<(String, String)>,
    pub credential: Credential,
    /// Passed through to the requester; not interpreted by the retry loop.
    pub verify_tls: bool,
}

impl TransferRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            verb: Verb::Get,
            url: url.into(),
            payload: None,
            headers: Vec::new(),
            credential: Credential::Anonymous,
            verify_tls: true,
        }
    }

    pub fn put(url: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            verb: Verb::Put,
            payload: Some(payload),
            ..Self::get(url)
        }
    }
}

/// Status and body of one completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseOutcome {
    pub status: u32,
    pub body: Vec<u8>,
}

impl ResponseOutcome {
    pub fn new(status: u32, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text (lossy), used for error messages.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
