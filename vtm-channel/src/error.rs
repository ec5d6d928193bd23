// Channel Error Types

use vtm_providers::{GigyaError, HlsError, MedialaanError, VtmError};

/// Channel-level errors
///
/// Every failure is terminal for the current operation: there are no
/// retries. A video item that fails to resolve simply stays incomplete and
/// the host may try again on next access.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Identity provider error: {0}")]
    AuthProvider(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Settings storage error: {0}")]
    Settings(String),

    #[error("Secret vault error: {0}")]
    Vault(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ChannelError>;

impl From<GigyaError> for ChannelError {
    fn from(err: GigyaError) -> Self {
        match err {
            GigyaError::Login {
                status,
                message,
                details,
            } => ChannelError::AuthProvider(format!("{message} ({status}): {details}")),
            GigyaError::Network(e) => ChannelError::Network(e),
            GigyaError::Parse(e) => ChannelError::Parse(e),
            GigyaError::InvalidConfig(e) => ChannelError::InvalidConfig(e),
        }
    }
}

impl From<VtmError> for ChannelError {
    fn from(err: VtmError) -> Self {
        match err {
            VtmError::Network(e) => ChannelError::Network(e),
            VtmError::Parse(e) => ChannelError::Parse(e),
            VtmError::InvalidConfig(e) => ChannelError::InvalidConfig(e),
        }
    }
}

impl From<MedialaanError> for ChannelError {
    fn from(err: MedialaanError) -> Self {
        match err {
            MedialaanError::Network(e) => ChannelError::Network(e),
            MedialaanError::Parse(e) => ChannelError::Parse(e),
            MedialaanError::InvalidConfig(e) => ChannelError::InvalidConfig(e),
        }
    }
}

impl From<HlsError> for ChannelError {
    fn from(err: HlsError) -> Self {
        match err {
            HlsError::Network(e) => ChannelError::Network(e),
            HlsError::Parse(e) => ChannelError::Parse(e),
            HlsError::InvalidUrl(e) => ChannelError::Parse(e),
        }
    }
}
