//! VTM Site Client Error Types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VtmError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for VtmError {
    fn from(err: reqwest::Error) -> Self {
        VtmError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for VtmError {
    fn from(err: serde_json::Error) -> Self {
        VtmError::Parse(err.to_string())
    }
}
