//! Session manager
//!
//! Logs on to the identity provider and caches the resulting signed
//! assertion in settings storage, delimited as `timestamp|signature|userId`.
//! A cached signature younger than the configured TTL is reused without
//! touching the network; anything else triggers a fresh login. Login
//! failures are terminal, never retried.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{error, info};
use vtm_providers::gigya::GigyaError;
use vtm_providers::GigyaClient;

use crate::config::ChannelConfig;
use crate::error::{ChannelError, Result};
use crate::settings::SettingsStore;
use crate::vault::{SecretSource, SecretVault};

/// Setting key under which the session triple is persisted.
pub const SIGNATURE_SETTING: &str = "channel_7F92EAEE-6066-4ED5-911A-2C3DCF964D19_signature";

/// Signed identity assertion proving a logged-in user.
///
/// The fields are kept verbatim as the provider returned them; the
/// timestamp stays a string so persisted and forwarded values are
/// byte-identical to the login response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub signature: String,
    pub timestamp: String,
}

impl Session {
    /// Issuance time as unix seconds, `None` when the provider sent a
    /// non-numeric timestamp.
    #[must_use]
    pub fn issued_at(&self) -> Option<u64> {
        self.timestamp.parse().ok()
    }

    /// Whether the session is still within the reuse window at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: u64, ttl_secs: u64) -> bool {
        self.issued_at()
            .is_some_and(|issued| now < issued.saturating_add(ttl_secs))
    }

    fn to_setting(&self) -> String {
        format!("{}|{}|{}", self.timestamp, self.signature, self.user_id)
    }

    fn from_setting(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(3, '|');
        let timestamp = parts.next()?.to_string();
        let signature = parts.next()?.to_string();
        let user_id = parts.next()?.to_string();
        Some(Self {
            user_id,
            signature,
            timestamp,
        })
    }
}

/// Session manager: cached-signature reuse plus Gigya login.
pub struct SessionManager {
    gigya: GigyaClient,
    settings: Arc<dyn SettingsStore>,
    username: Option<String>,
    password_sources: Vec<SecretSource>,
    ttl_secs: u64,
}

impl SessionManager {
    pub fn new(config: &ChannelConfig, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            gigya: GigyaClient::new(
                config.endpoints.gigya_base.clone(),
                config.endpoints.gigya_api_key.clone(),
            ),
            settings,
            username: config.account.username.clone(),
            password_sources: config.account.password_sources(),
            ttl_secs: config.session.ttl_secs,
        }
    }

    /// Obtain a valid session, reusing the cached signature when fresh.
    ///
    /// Failure policy: missing credentials and provider rejections are hard
    /// failures with no retry; nothing is persisted on failure.
    pub async fn log_on(&self) -> Result<Session> {
        if let Some(cached) = self
            .settings
            .get(SIGNATURE_SETTING)
            .and_then(|raw| Session::from_setting(&raw))
        {
            if cached.is_valid_at(unix_now(), self.ttl_secs) {
                info!(user_id = %cached.user_id, "Found valid signature, reusing it");
                return Ok(cached);
            }
        }

        info!("Logging onto VTM");
        let username = self
            .username
            .clone()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                ChannelError::MissingCredentials("no username configured".to_string())
            })?;
        let password = SecretVault::load_first("vtm account password", &self.password_sources)
            .map_err(|e| ChannelError::MissingCredentials(e.to_string()))?;

        let identity = match self.gigya.login(&username, &password).await {
            Ok(identity) => identity,
            Err(GigyaError::Login {
                status,
                message,
                details,
            }) => {
                error!(status, message = %message, details = %details, "Error logging in");
                return Err(ChannelError::AuthProvider(format!("{message}: {details}")));
            }
            Err(e) => return Err(e.into()),
        };

        let session = Session {
            user_id: identity.uid,
            signature: identity.uid_signature,
            timestamp: identity.signature_timestamp,
        };
        self.settings.set(SIGNATURE_SETTING, &session.to_setting())?;
        Ok(session)
    }
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
