//! Medialaan HTTP Client

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use url::Url;

use super::error::MedialaanError;
use super::types::{LiveResponse, PlaybackResponse, TokenResponse};

const APP_ID: &str = "vtm_watch";
const USER_NETWORK: &str = "vtm-sso";
const DATABASE: &str = "vtm-sso";
const LIVE_CHANNEL: &str = "vtm";

/// Medialaan HTTP Client
///
/// Talks to three hosts of the same platform: the VOD playback API, the
/// user/token API and the live-stream API. All base URLs are injectable so
/// tests can point the client at a mock server.
pub struct MedialaanClient {
    vod_base: String,
    user_base: String,
    live_base: String,
    api_key: String,
    client: Client,
}

impl MedialaanClient {
    /// Create a new Medialaan client
    pub fn new(
        vod_base: impl Into<String>,
        user_base: impl Into<String>,
        live_base: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            vod_base: vod_base.into(),
            user_base: user_base.into(),
            live_base: live_base.into(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Build the VOD playback-authorization URL for a content id and a
    /// signed identity assertion.
    pub fn playback_url(
        &self,
        content_id: &str,
        uid: &str,
        signature: &str,
        timestamp: &str,
    ) -> Result<Url, MedialaanError> {
        let mut url = Url::parse(&format!(
            "{}/api/1.0/item/{}/video",
            self.vod_base, content_id
        ))?;
        url.query_pairs_mut()
            .append_pair("app_id", APP_ID)
            .append_pair("user_network", USER_NETWORK)
            .append_pair("UID", uid)
            .append_pair("UIDSignature", signature)
            .append_pair("signatureTimestamp", timestamp);
        Ok(url)
    }

    /// Exchange a content id + session triple for the HLS manifest URI.
    pub async fn playback_uri(
        &self,
        content_id: &str,
        uid: &str,
        signature: &str,
        timestamp: &str,
    ) -> Result<String, MedialaanError> {
        let url = self.playback_url(content_id, uid, signature, timestamp)?;
        let response = self.client.get(url).send().await?;
        let resp: PlaybackResponse = response.json().await?;

        resp.response
            .uri
            .ok_or_else(|| MedialaanError::Parse("playback response missing uri".to_string()))
    }

    /// Build the one-shot request-token URL.
    pub fn request_token_url(
        &self,
        uid: &str,
        signature: &str,
        timestamp: &str,
    ) -> Result<Url, MedialaanError> {
        let mut url = Url::parse(&format!("{}/user/v1/gigya/request_token", self.user_base))?;
        url.query_pairs_mut()
            .append_pair("uid", uid)
            .append_pair("signature", signature)
            .append_pair("timestamp", timestamp)
            .append_pair("apikey", &self.api_key)
            .append_pair("database", DATABASE);
        Ok(url)
    }

    /// Request a one-shot playback token, signed with the session.
    ///
    /// Token responses must never come from a cache.
    pub async fn request_token(
        &self,
        uid: &str,
        signature: &str,
        timestamp: &str,
    ) -> Result<String, MedialaanError> {
        let url = self.request_token_url(uid, signature, timestamp)?;
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let resp: TokenResponse = response.json().await?;
        Ok(resp.response)
    }

    /// Look up the current live episode's HLS manifest URL.
    ///
    /// Sends a cache-busting nonce and a no-cache header: live data must
    /// not be served stale. Returns `None` when the channel is not
    /// currently streaming over HLS.
    pub async fn live_manifest(&self, access_token: &str) -> Result<Option<String>, MedialaanError> {
        let mut url = Url::parse(&format!(
            "{}/stream-live/v1/channels/{}/episodes/current/video",
            self.live_base, LIVE_CHANNEL
        ))?;
        url.query_pairs_mut()
            .append_pair("access_token", access_token)
            .append_pair("_", &unix_now().to_string());

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let resp: LiveResponse = response.json().await?;
        Ok(resp.response.url.and_then(|u| u.hls))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
