//! Error types for the loop params generator.
//!
//! Parameter generation itself never fails; these cover the surfaces around it
//! (configuration, logging setup, reading inputs for the CLI).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoopParamsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for LoopParamsError {
    fn from(err: config::ConfigError) -> Self {
        LoopParamsError::ConfigError(err.to_string())
    }
}
