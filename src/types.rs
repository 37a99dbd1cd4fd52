use groth16::{ErrorKind, R1csError, SnarkError};
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    R1cs(#[from] R1csError),
    #[error(transparent)]
    Snark(#[from] SnarkError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Library classification; `None` for configuration errors raised here.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::R1cs(err) => Some(err.kind()),
            Error::Snark(err) => Some(err.kind()),
            Error::Config(_) => None,
        }
    }
}
