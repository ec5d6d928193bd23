//! Medialaan Playback Client Error Types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedialaanError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for MedialaanError {
    fn from(err: reqwest::Error) -> Self {
        MedialaanError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for MedialaanError {
    fn from(err: serde_json::Error) -> Self {
        MedialaanError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for MedialaanError {
    fn from(err: url::ParseError) -> Self {
        MedialaanError::InvalidConfig(err.to_string())
    }
}
