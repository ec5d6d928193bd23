//! Gigya Client Error Types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GigyaError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Login rejected (status {status}): {message} - {details}")]
    Login {
        status: u16,
        message: String,
        details: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for GigyaError {
    fn from(err: reqwest::Error) -> Self {
        GigyaError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GigyaError {
    fn from(err: serde_json::Error) -> Self {
        GigyaError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for GigyaError {
    fn from(err: url::ParseError) -> Self {
        GigyaError::InvalidConfig(err.to_string())
    }
}
