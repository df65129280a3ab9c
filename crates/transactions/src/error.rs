/// Error type for the transactions module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A page could not be fetched from the explorer
    #[error("Fetch error: {0}")]
    FetchError(#[from] tronex_common::Error),
    /// The export was asked for something that can't be done
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    /// Error when serializing records
    #[error("Json error: {0}")]
    SerdeError(#[from] serde_json::Error),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
