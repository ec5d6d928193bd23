use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ChannelError, Result};
use crate::vault::SecretSource;

/// Channel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub account: AccountConfig,
    pub endpoints: EndpointsConfig,
    pub session: SessionPolicy,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

/// Account credentials: username in plain config, password via the vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub username: Option<String>,
    pub password_file: Option<PathBuf>,
    pub password_env: Option<String>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            username: None,
            password_file: None,
            password_env: Some("VTM_PASSWORD".to_string()),
        }
    }
}

impl AccountConfig {
    /// Vault sources for the password, in priority order.
    #[must_use]
    pub fn password_sources(&self) -> Vec<SecretSource> {
        let mut sources = Vec::new();
        if let Some(path) = &self.password_file {
            sources.push(SecretSource::File(path.clone()));
        }
        if let Some(var) = &self.password_env {
            sources.push(SecretSource::Env(var.clone()));
        }
        sources
    }

    /// Whether a (non-empty) username is configured.
    #[must_use]
    pub fn has_username(&self) -> bool {
        self.username.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// Base URLs and API keys of the external services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub gigya_base: String,
    pub vtm_base: String,
    pub vod_base: String,
    pub user_base: String,
    pub live_base: String,
    pub gigya_api_key: String,
    pub playback_api_key: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            gigya_base: "https://accounts.eu1.gigya.com".to_string(),
            vtm_base: "http://vtm.be".to_string(),
            vod_base: "http://vod.medialaan.io".to_string(),
            user_base: "https://user.medialaan.io".to_string(),
            live_base: "http://stream-live.medialaan.io".to_string(),
            gigya_api_key: "3_HZ0FtkMW_gOyKlqQzW5_0FHRC7Nd5XpXJZcDdXY4pk5eES2ZWmejRW5egwVm4ug-"
                .to_string(),
            playback_api_key: "vtm-b7sJGrKwMJj0VhdZvqLDFvgkJF5NLjNY".to_string(),
        }
    }
}

/// Session reuse policy.
///
/// The identity provider does not document its signature lifetime; the
/// window below only bounds how long a cached signature is reused and is
/// deliberately a policy knob, not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPolicy {
    pub ttl_secs: u64,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self { ttl_secs: 60 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// "json" (production) or "pretty" (development)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Where persisted channel settings live. `None` keeps them in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub settings_path: Option<PathBuf>,
}

impl ChannelConfig {
    /// Load configuration from an optional file plus `VTM_`-prefixed
    /// environment overrides (e.g. `VTM_ACCOUNT__USERNAME`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }
        builder = builder.add_source(Environment::with_prefix("VTM").separator("__"));

        builder
            .build()
            .and_then(ConfigBuilder::try_deserialize)
            .map_err(|e| ChannelError::InvalidConfig(e.to_string()))
    }
}
