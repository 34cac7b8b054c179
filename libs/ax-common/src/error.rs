//! Shared error type for tool configuration

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommonError>;

#[derive(Debug, Error)]
pub enum CommonError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl CommonError {
    pub fn config(msg: impl Into<String>) -> Self {
        CommonError::Configuration(msg.into())
    }
}
