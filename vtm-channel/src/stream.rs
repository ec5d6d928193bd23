//! Stream resolver
//!
//! Finishes an incomplete video item: detail page -> embedded player JSON
//! -> content id -> playback authorization -> manifest -> stream
//! alternatives. The live variant swaps the stored content id for a
//! one-shot token exchange and forces every call past any caching layer.
//!
//! A manifest that resolves to zero variants is not an error: the item
//! stays incomplete and the host retries on next access.

use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, warn};
use vtm_providers::vtm::scrape;
use vtm_providers::{hls, MedialaanClient, VtmClient};

use crate::error::{ChannelError, Result};
use crate::item::MediaItem;
use crate::session::Session;

pub struct StreamResolver {
    vtm: Arc<VtmClient>,
    medialaan: MedialaanClient,
    http: Client,
}

impl StreamResolver {
    pub fn new(vtm: Arc<VtmClient>, medialaan: MedialaanClient) -> Self {
        Self {
            vtm,
            medialaan,
            http: Client::new(),
        }
    }

    /// Resolve a VOD item into playable streams.
    pub async fn resolve(&self, item: &mut MediaItem, session: &Session) -> Result<()> {
        debug!(title = %item.title, url = %item.url, "Updating video item");

        let page = self.vtm.page(&item.url).await?;
        let video = scrape::player_video(&page)?;
        let content_id = video["id"]
            .as_str()
            .ok_or_else(|| ChannelError::Parse("player JSON missing content id".to_string()))?;

        let manifest_url = self
            .medialaan
            .playback_uri(
                content_id,
                &session.user_id,
                &session.signature,
                &session.timestamp,
            )
            .await?;

        self.append_manifest(item, &manifest_url).await?;

        if let Some(duration) = video["duration"].as_u64() {
            item.duration_secs = Some(duration);
        }
        Ok(())
    }

    /// Resolve the live channel via the one-shot token exchange.
    pub async fn resolve_live(&self, item: &mut MediaItem, session: &Session) -> Result<()> {
        debug!("Updating live stream");

        let token = self
            .medialaan
            .request_token(&session.user_id, &session.signature, &session.timestamp)
            .await?;

        let Some(manifest_url) = self.medialaan.live_manifest(&token).await? else {
            warn!("Live endpoint returned no HLS manifest");
            return Ok(());
        };

        self.append_manifest(item, &manifest_url).await
    }

    async fn append_manifest(&self, item: &mut MediaItem, manifest_url: &str) -> Result<()> {
        let variants = hls::fetch_variants(&self.http, manifest_url).await?;
        if variants.is_empty() {
            warn!(title = %item.title, "Manifest resolved to zero streams, leaving item incomplete");
        }
        for variant in variants {
            item.append_stream(variant);
        }
        Ok(())
    }
}
