use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while parsing or validating domain values.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn invalid(kind: &'static str, value: &str) -> Self {
        Self::InvalidValue { kind, value: value.to_owned() }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
