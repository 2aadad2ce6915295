//! Error type for client operations.

use starling_types::ValidationError;

/// Error type for client operations.
///
/// Operations fail with [`ClientError::Validation`] before any request is sent,
/// or with [`ClientError::Http`] when the exchange itself fails. A response with a
/// non-2xx status is not an error: it is returned to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status, produced only by the decode helpers in [`crate::response`].
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Returns the violation messages if this is a validation failure.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            ClientError::Validation(e) => Some(e.messages()),
            _ => None,
        }
    }
}
