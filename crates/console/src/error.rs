//! Request failure model.

use thiserror::Error;

/// A failed call to one of the storefront services.
///
/// The variants only exist for log detail; callers treat every one of them
/// as "the request failed".
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status of a rejected request, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
