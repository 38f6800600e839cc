//! Per-attempt response judgement.

use super::classify::classify_status;
use super::error::TransferError;
use crate::credential::Credential;
use crate::request::ResponseOutcome;

/// Accept any status outside 400..600; classify the rest. Headers are never
/// looked at and nothing is retried here.
pub fn validate(outcome: &ResponseOutcome, credential: &Credential) -> Result<(), TransferError> {
    match classify_status(outcome.status, &outcome.text(), credential) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
