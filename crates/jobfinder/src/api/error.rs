//! Remote job source error types.

use thiserror::Error;

/// Maximum length for error bodies kept from non-success responses.
pub(crate) const MAX_ERROR_BODY_LENGTH: usize = 200;

/// Errors that can occur while fetching the job collection.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("API error: {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a valid job collection.
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// A concurrent refresh this call waited on failed with this cause.
    #[error("{0}")]
    Joined(String),
}

/// Truncates a response body so error values and logs stay bounded.
pub(crate) fn truncate_body(body: &str) -> String {
    if body.chars().count() > MAX_ERROR_BODY_LENGTH {
        let cut: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
        format!("{}... (truncated)", cut)
    } else {
        body.to_string()
    }
}
