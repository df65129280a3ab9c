//! Errors raised by the shared HTTP resources.

/// Error type for the common resources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error
    #[error("Error: {0}")]
    Generic(String),
    /// The request could not be sent, timed out, or returned a non-success status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body was not the JSON shape we expected
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    /// An IO error occurred
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
}
