//! Generic media-item model
//!
//! What the host application consumes: playable videos and navigable
//! folders. Items from the JSON feed arrive complete (stream URL in the
//! feed); items from scraped pages arrive incomplete and are finished by
//! the stream resolver.

use chrono::{DateTime, Utc};
use vtm_providers::StreamVariant;

/// Marker URL of the synthetic live-channel item. The live stream has no
/// detail page; resolution goes through the token exchange instead.
pub const LIVE_STREAM_URL: &str = "#livestream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Video,
    Folder,
}

/// One listing entry.
///
/// Invariant: `complete` implies at least one stream alternative. The only
/// way to mark an item complete is appending a stream, so the invariant
/// holds by construction; a resolver that finds zero streams leaves the
/// item incomplete for the host to retry later.
#[derive(Debug, Clone)]
pub struct MediaItem {
    pub title: String,
    pub url: String,
    pub kind: ItemKind,
    pub thumb: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub duration_secs: Option<u64>,
    pub live: bool,
    complete: bool,
    streams: Vec<StreamVariant>,
}

impl MediaItem {
    /// Create a navigable folder item
    #[must_use]
    pub fn folder(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind: ItemKind::Folder,
            thumb: None,
            description: None,
            date: None,
            duration_secs: None,
            live: false,
            complete: false,
            streams: Vec::new(),
        }
    }

    /// Create a video item, incomplete until a stream is appended
    #[must_use]
    pub fn video(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Video,
            ..Self::folder(title, url)
        }
    }

    /// The synthetic live-channel entry
    #[must_use]
    pub fn live_channel(title: impl Into<String>) -> Self {
        Self {
            live: true,
            ..Self::video(title, LIVE_STREAM_URL)
        }
    }

    /// Append a stream alternative; the first one marks the item complete.
    pub fn append_stream(&mut self, variant: StreamVariant) {
        self.streams.push(variant);
        self.complete = true;
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn streams(&self) -> &[StreamVariant] {
        &self.streams
    }

    /// Whether this item resolves through the live flow
    #[must_use]
    pub fn is_live_stream(&self) -> bool {
        self.live || self.url == LIVE_STREAM_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_starts_incomplete() {
        let item = MediaItem::video("Aflevering 1", "http://vtm.be/video/x");
        assert_eq!(item.kind, ItemKind::Video);
        assert!(!item.is_complete());
        assert!(item.streams().is_empty());
    }

    #[test]
    fn test_first_stream_completes_item() {
        let mut item = MediaItem::video("Aflevering 1", "http://vtm.be/video/x");
        item.append_stream(StreamVariant {
            url: "http://vod.example.com/720p.m3u8".to_string(),
            bitrate: 1_280_000,
        });
        item.append_stream(StreamVariant {
            url: "http://vod.example.com/1080p.m3u8".to_string(),
            bitrate: 2_560_000,
        });

        assert!(item.is_complete());
        assert_eq!(item.streams().len(), 2);
    }

    #[test]
    fn test_live_channel_marker() {
        let item = MediaItem::live_channel("Live VTM");
        assert!(item.is_live_stream());
        assert_eq!(item.url, LIVE_STREAM_URL);
        assert!(!item.is_complete());
    }
}
