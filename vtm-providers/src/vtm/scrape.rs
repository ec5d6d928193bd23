//! HTML scraping for the VTM listing and detail pages
//!
//! The site exposes no JSON equivalent for these pages, so two fixed
//! patterns pull episode links and video thumbnails+links out of the
//! markup, and a third extracts the player JSON embedded in the detail
//! page. A pattern that does not match yields no results; the detail-page
//! pattern missing is fatal for that item.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::error::VtmError;

static EPISODE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a[^>]+href="([^"]+sm_field_program_active[^"]+)"[^>]*>([^(<]+)"#)
        .expect("episode link pattern")
});

static VIDEO_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<img[^>]+class="media-object"[^>]+src="([^"]+)"[^>]*>[\w\W]{0,1000}?<a[^>]+href="/([^"]+)"[^>]*>([^<]+)"#,
    )
    .expect("video link pattern")
});

static PLAYER_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.vmmaplayer\(([^<]+)\);\W*</script>"#).expect("player json pattern")
});

/// Episode (program) anchor scraped from the longform listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeLink {
    pub title: String,
    /// Listing URL with HTML entities undone.
    pub url: String,
}

/// Video thumbnail+anchor pair scraped from a program listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink {
    pub title: String,
    /// Site-relative path of the detail page.
    pub path: String,
    pub thumb: String,
}

/// Scrape program links from the longform listing page.
#[must_use]
pub fn episode_links(html: &str) -> Vec<EpisodeLink> {
    EPISODE_LINK
        .captures_iter(html)
        .map(|cap| EpisodeLink {
            title: cap[2].trim().to_string(),
            url: cap[1].replace("&amp;", "&"),
        })
        .collect()
}

/// Scrape video entries from a program listing page.
#[must_use]
pub fn video_links(html: &str) -> Vec<VideoLink> {
    VIDEO_LINK
        .captures_iter(html)
        .map(|cap| VideoLink {
            title: cap[3].trim().to_string(),
            path: cap[2].to_string(),
            thumb: cap[1].to_string(),
        })
        .collect()
}

/// Extract the video object from the player JSON embedded in a detail page.
///
/// The page calls `$(...).vmmaplayer(<config>, <video>);` inside a script
/// tag. The raw capture is a comma-separated argument list; wrapping it in
/// brackets turns it into a JSON array whose second element is the video
/// object (with `id` and `duration`).
pub fn player_video(html: &str) -> Result<Value, VtmError> {
    let capture = PLAYER_JSON
        .captures(html)
        .and_then(|cap| cap.get(1))
        .ok_or_else(|| VtmError::Parse("player JSON not found in detail page".to_string()))?;

    let arguments: Value = serde_json::from_str(&format!("[{}]", capture.as_str()))?;
    arguments
        .get(1)
        .cloned()
        .ok_or_else(|| VtmError::Parse("player JSON missing video argument".to_string()))
}
