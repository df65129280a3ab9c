//! Price lookup errors

/// Error type for the price lookup module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error
    #[error("Error: {0}")]
    Generic(String),
    /// The price provider request failed
    #[error("Price provider error: {0}")]
    Provider(#[from] tronex_common::Error),
    /// Error from eyre
    #[error("Eyre error: {0}")]
    Eyre(#[from] eyre::Report),
}
