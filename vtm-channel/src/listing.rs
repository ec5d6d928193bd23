//! Listing resolver
//!
//! Turns the site's two listing shapes into media items:
//!
//! - JSON feeds: program feed -> folder items pointing at per-program
//!   article feeds; article feeds -> video items that are complete
//!   immediately (the feed carries the stream URL).
//! - Scraped HTML pages: program links -> folders, video thumbnails+links
//!   -> incomplete video items finished later by the stream resolver.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tracing::{debug, warn};
use vtm_providers::vtm::{scrape, ArticleEntry, ProgramEntry};
use vtm_providers::{StreamVariant, VtmClient};

use crate::error::Result;
use crate::item::MediaItem;

pub struct ListingResolver {
    vtm: Arc<VtmClient>,
}

impl ListingResolver {
    pub fn new(vtm: Arc<VtmClient>) -> Self {
        Self { vtm }
    }

    /// Program listing from the JSON feed.
    pub async fn programs(&self) -> Result<Vec<MediaItem>> {
        let entries = self.vtm.program_feed().await?;
        Ok(entries
            .iter()
            .filter_map(|entry| self.program_item(entry))
            .collect())
    }

    /// Map one program feed entry to a folder item.
    ///
    /// Archived programs yield nothing.
    pub fn program_item(&self, entry: &ProgramEntry) -> Option<MediaItem> {
        if entry.archived {
            warn!(title = %entry.title, "Found archived item, skipping");
            return None;
        }
        let Some(id) = entry.id.as_deref() else {
            warn!(title = %entry.title, "Program entry without id, skipping");
            return None;
        };
        let feed_url = match self.vtm.article_feed_url(id) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(title = %entry.title, error = %e, "Cannot build article feed URL");
                return None;
            }
        };

        let mut item = MediaItem::folder(&entry.title, feed_url);
        item.description = entry.body.clone();
        item.thumb = entry
            .images
            .as_ref()
            .and_then(|i| i.image.as_ref())
            .and_then(|i| i.full.clone());
        Some(item)
    }

    /// Video listing from a per-program article feed.
    pub async fn videos(&self, feed_url: &str) -> Result<Vec<MediaItem>> {
        let entries = self.vtm.article_feed(feed_url).await?;
        Ok(entries.iter().filter_map(Self::video_item).collect())
    }

    /// Map one article feed entry to a complete video item.
    ///
    /// Entries without a stream URL are dropped with a warning; the feed
    /// sometimes lists text-only articles.
    pub fn video_item(entry: &ArticleEntry) -> Option<MediaItem> {
        let Some(stream_url) = entry.stream_url() else {
            warn!(title = %entry.title, "Found item without video, skipping");
            return None;
        };

        let mut item = MediaItem::video(&entry.title, "");
        item.description = entry.text.clone();
        item.thumb = entry.image.as_ref().and_then(|i| i.full.clone());
        item.date = entry
            .created
            .as_ref()
            .and_then(|c| Utc.timestamp_opt(c.timestamp, 0).single());
        item.append_stream(StreamVariant {
            url: stream_url.to_string(),
            bitrate: 0,
        });
        Some(item)
    }

    /// Program listing scraped from the longform HTML page.
    pub async fn scraped_programs(&self) -> Result<Vec<MediaItem>> {
        let html = self.vtm.page(&self.vtm.longform_listing_url()).await?;
        let links = scrape::episode_links(&html);
        debug!(count = links.len(), "Scraped program links");

        Ok(links
            .into_iter()
            .map(|link| {
                let url = if link.url.starts_with('/') {
                    self.vtm.absolute_url(&link.url)
                } else {
                    link.url
                };
                MediaItem::folder(link.title, url)
            })
            .collect())
    }

    /// Video listing scraped from a program's HTML page. Items are
    /// incomplete; the stream resolver finishes them on demand.
    pub async fn scraped_videos(&self, page_url: &str) -> Result<Vec<MediaItem>> {
        let html = self.vtm.page(page_url).await?;
        let links = scrape::video_links(&html);
        debug!(count = links.len(), "Scraped video links");

        Ok(links
            .into_iter()
            .map(|link| {
                let mut item = MediaItem::video(link.title, self.vtm.absolute_url(&link.path));
                item.thumb = Some(link.thumb);
                item
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ListingResolver {
        ListingResolver::new(Arc::new(VtmClient::new("http://vtm.be")))
    }

    fn program(raw: &str) -> ProgramEntry {
        serde_json::from_str(raw).unwrap()
    }

    fn article(raw: &str) -> ArticleEntry {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_archived_program_yields_nothing() {
        let entry = program(r#"{"title": "Archief", "id": "13", "archived": true}"#);
        assert!(resolver().program_item(&entry).is_none());
    }

    #[test]
    fn test_program_item_points_at_article_feed() {
        let entry = program(
            r#"{
                "title": "Familie",
                "id": "12",
                "body": "Dagelijkse soap",
                "images": {"image": {"full": "http://vtm.be/img/12.jpg"}}
            }"#,
        );
        let item = resolver().program_item(&entry).unwrap();

        assert_eq!(item.kind, crate::item::ItemKind::Folder);
        assert!(item.url.starts_with("http://vtm.be/feed/articles?program=12"));
        assert_eq!(item.description.as_deref(), Some("Dagelijkse soap"));
        assert_eq!(item.thumb.as_deref(), Some("http://vtm.be/img/12.jpg"));
    }

    #[test]
    fn test_video_without_stream_yields_nothing() {
        let entry = article(r#"{"title": "Teaser", "text": "Korte clip"}"#);
        assert!(ListingResolver::video_item(&entry).is_none());
    }

    #[test]
    fn test_feed_video_is_complete_immediately() {
        let entry = article(
            r#"{
                "title": "Aflevering 3",
                "created": {"timestamp": 1481234567},
                "video": {"url": {"default": "http://vod.example.com/a3.mp4"}}
            }"#,
        );
        let item = ListingResolver::video_item(&entry).unwrap();

        assert!(item.is_complete());
        assert_eq!(item.streams().len(), 1);
        assert_eq!(item.streams()[0].url, "http://vod.example.com/a3.mp4");
        assert_eq!(item.streams()[0].bitrate, 0);
        assert_eq!(item.date.unwrap().timestamp(), 1481234567);
    }
}
