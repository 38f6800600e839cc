//! Map HTTP status codes (plus credential state) to typed transfer errors.

use super::error::TransferError;
use crate::credential::Credential;

/// Classify a response status. Returns `None` for statuses outside 400..600.
///
/// 401 always means authentication is required. 403 is ambiguous on the
/// wire: without a token the remote could not know who we are, so it is also
/// treated as authentication required; with a token it is a plain denial.
pub fn classify_status(status: u32, body: &str, credential: &Credential) -> Option<TransferError> {
    let err = match status {
        401 => TransferError::AuthenticationRequired(body.to_string()),
        403 if credential.has_token() => TransferError::Forbidden(body.to_string()),
        403 => TransferError::AuthenticationRequired(body.to_string()),
        400..=499 => TransferError::Client {
            status,
            message: format!("{} Client Error: {}", status, body),
        },
        500..=599 => TransferError::Server {
            status,
            message: format!("{} Server Error: {}", status, body),
        },
        _ => return None,
    };
    Some(err)
}
