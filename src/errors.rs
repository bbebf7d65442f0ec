use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid epoch {0:?}, expected a non-negative integer")]
    InvalidEpoch(String),

    #[error("invalid comparison operator {0:?}")]
    InvalidOperator(String),
}

pub type Result<T> = std::result::Result<T, Error>;
