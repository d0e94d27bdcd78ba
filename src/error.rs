//! Error types for tree induction and classification
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input shape: {0}")]
    InputShape(String),
    #[error("value {value:?} of attribute {attribute:?} was never seen during training")]
    UnknownValue { attribute: String, value: String },
    #[error("expected {expected} attribute values, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("{found} attributes exceed the limit of {limit}")]
    TooManyAttributes { found: usize, limit: usize },
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("tree wasn't built yet")]
    NotFitted,
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
