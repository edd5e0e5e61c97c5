use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed cookie value`")]
    Malformed(),
    #[error("Bad signature`")]
    BadSignature(),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
