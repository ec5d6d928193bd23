//! Gigya HTTP Client

use reqwest::Client;
use url::Url;

use super::error::GigyaError;
use super::types::{Identity, LoginResponse};

/// Gigya SDK revision reported alongside login calls.
const SDK_VERSION: &str = "js_6.1";

/// Gigya HTTP Client
///
/// Performs the `accounts.login` exchange. The base URL is injectable so
/// tests can point the client at a mock server.
pub struct GigyaClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl GigyaClient {
    /// Create a new Gigya client for the given deployment and site API key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Get current base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the `accounts.login` request URL.
    ///
    /// Every parameter goes through the URL query serializer, so credentials
    /// containing reserved characters are percent-encoded instead of being
    /// spliced into the string.
    pub fn login_url(&self, login_id: &str, password: &str) -> Result<Url, GigyaError> {
        let mut url = Url::parse(&format!("{}/accounts.login", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("APIKey", &self.api_key)
            .append_pair("sdk", SDK_VERSION)
            .append_pair("format", "json")
            .append_pair("loginID", login_id)
            .append_pair("password", password);
        Ok(url)
    }

    /// Log in with site credentials.
    ///
    /// Returns the signed identity assertion, or `GigyaError::Login` when
    /// the provider reports a non-200 `statusCode`. No retries: a rejected
    /// login is terminal for the caller.
    pub async fn login(&self, login_id: &str, password: &str) -> Result<Identity, GigyaError> {
        let url = self.login_url(login_id, password)?;
        let response = self.client.get(url).send().await?;
        let resp: LoginResponse = response.json().await?;

        if resp.status_code != 200 {
            return Err(GigyaError::Login {
                status: resp.status_code,
                message: resp.error_message.unwrap_or_default(),
                details: resp.error_details.unwrap_or_default(),
            });
        }

        let uid = resp
            .uid
            .ok_or_else(|| GigyaError::Parse("login response missing UID".to_string()))?;
        let uid_signature = resp
            .uid_signature
            .ok_or_else(|| GigyaError::Parse("login response missing UIDSignature".to_string()))?;
        let signature_timestamp = resp.signature_timestamp.ok_or_else(|| {
            GigyaError::Parse("login response missing signatureTimestamp".to_string())
        })?;

        Ok(Identity {
            uid,
            uid_signature,
            signature_timestamp,
        })
    }
}
