//! Channel pipeline
//!
//! Composes the session manager with a listing/stream capability pair. The
//! capabilities are traits so a host (or a test) can inject its own; the
//! default wiring uses the resolvers in this crate over the provider
//! clients.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use vtm_providers::{MedialaanClient, VtmClient};

use crate::config::ChannelConfig;
use crate::error::Result;
use crate::item::MediaItem;
use crate::listing::ListingResolver;
use crate::session::{Session, SessionManager};
use crate::settings::SettingsStore;
use crate::stream::StreamResolver;

/// Capability: produce listings.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Top-level program listing.
    async fn main_listing(&self) -> Result<Vec<MediaItem>>;

    /// Listing below a folder item.
    async fn sub_listing(&self, item: &MediaItem) -> Result<Vec<MediaItem>>;
}

/// Capability: finish incomplete video items.
#[async_trait]
pub trait StreamSource: Send + Sync {
    async fn complete_item(&self, item: &mut MediaItem, session: &Session) -> Result<()>;
}

#[async_trait]
impl ListingSource for ListingResolver {
    async fn main_listing(&self) -> Result<Vec<MediaItem>> {
        self.scraped_programs().await
    }

    async fn sub_listing(&self, item: &MediaItem) -> Result<Vec<MediaItem>> {
        // Folder items from the JSON feed point at article feeds; scraped
        // folders point at HTML listing pages.
        if item.url.contains("/feed/articles") {
            self.videos(&item.url).await
        } else {
            self.scraped_videos(&item.url).await
        }
    }
}

#[async_trait]
impl StreamSource for StreamResolver {
    async fn complete_item(&self, item: &mut MediaItem, session: &Session) -> Result<()> {
        if item.is_live_stream() {
            self.resolve_live(item, session).await
        } else {
            self.resolve(item, session).await
        }
    }
}

/// The VTM channel: session + listing + stream resolution behind one API.
pub struct Channel {
    session: SessionManager,
    listings: Arc<dyn ListingSource>,
    streams: Arc<dyn StreamSource>,
    live_enabled: bool,
}

impl Channel {
    /// Wire up the default resolvers from configuration.
    pub fn new(config: &ChannelConfig, settings: Arc<dyn SettingsStore>) -> Self {
        let vtm = Arc::new(VtmClient::new(config.endpoints.vtm_base.clone()));
        let medialaan = MedialaanClient::new(
            config.endpoints.vod_base.clone(),
            config.endpoints.user_base.clone(),
            config.endpoints.live_base.clone(),
            config.endpoints.playback_api_key.clone(),
        );

        Self {
            session: SessionManager::new(config, settings),
            listings: Arc::new(ListingResolver::new(Arc::clone(&vtm))),
            streams: Arc::new(StreamResolver::new(vtm, medialaan)),
            live_enabled: config.account.has_username(),
        }
    }

    /// Build a channel from injected capabilities.
    pub fn with_sources(
        session: SessionManager,
        listings: Arc<dyn ListingSource>,
        streams: Arc<dyn StreamSource>,
        live_enabled: bool,
    ) -> Self {
        Self {
            session,
            listings,
            streams,
            live_enabled,
        }
    }

    /// Top-level listing.
    ///
    /// When a username is configured the synthetic live-channel entry is
    /// prepended: live access is a capability of the account, not a
    /// scraped item.
    pub async fn main_listing(&self) -> Result<Vec<MediaItem>> {
        let mut items = Vec::new();
        if self.live_enabled {
            debug!("Adding live channel entry");
            items.push(MediaItem::live_channel("Live VTM"));
        }
        items.extend(self.listings.main_listing().await?);
        Ok(items)
    }

    /// Listing below a folder item.
    pub async fn sub_listing(&self, item: &MediaItem) -> Result<Vec<MediaItem>> {
        self.listings.sub_listing(item).await
    }

    /// Finish an incomplete video item, logging on first.
    ///
    /// Strictly sequential per item: login, detail fetch, token exchange,
    /// manifest fetch, manifest parse.
    pub async fn resolve(&self, item: &mut MediaItem) -> Result<()> {
        let session = self.session.log_on().await?;
        self.streams.complete_item(item, &session).await
    }
}
