/// Error type for the Core module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error when serializing or deserializing JSON data
    #[error("Json error: {0}")]
    SerdeError(#[from] serde_json::Error),
    /// Error from the transactions module
    #[error("Transactions error: {0}")]
    Transactions(#[from] tronex_transactions::Error),
    /// Error from the pricing module
    #[error("Pricing error: {0}")]
    Pricing(#[from] tronex_pricing::error::Error),
    /// Error from the configuration module
    #[error("Config error: {0}")]
    Config(#[from] tronex_config::error::Error),
    /// Generic error with a message
    #[error("Error: {0}")]
    Generic(String),
}
