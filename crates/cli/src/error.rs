#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Generic(String),
    #[error(transparent)]
    Core(#[from] tronex_core::error::Error),
}
