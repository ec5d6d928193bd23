//! VTM feed wire types
//!
//! Both feeds are `{response: {items: [...]}}` shaped.

use serde::Deserialize;
use serde_json::Value;

use crate::json::string_or_number;

#[derive(Debug, Deserialize)]
pub struct FeedEnvelope {
    pub response: FeedItems,
}

#[derive(Debug, Deserialize)]
pub struct FeedItems {
    #[serde(default)]
    pub items: Vec<Value>,
}

/// One entry of the program feed
/// (`/feed/programs?format=json&type=all&only_with_video=true`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramEntry {
    pub title: String,

    #[serde(default)]
    pub archived: bool,

    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub images: Option<ProgramImages>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgramImages {
    #[serde(default)]
    pub image: Option<ImageVariants>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageVariants {
    #[serde(default)]
    pub full: Option<String>,
}

/// One entry of a per-program article feed (`/feed/articles?program=...`).
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleEntry {
    pub title: String,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub image: Option<ImageVariants>,

    #[serde(default)]
    pub created: Option<Created>,

    #[serde(default)]
    pub video: Option<ArticleVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub timestamp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleVideo {
    #[serde(default)]
    pub url: Option<VideoUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoUrls {
    #[serde(default)]
    pub default: Option<String>,
}

impl ArticleEntry {
    /// The directly playable stream URL, when the feed carries one.
    #[must_use]
    pub fn stream_url(&self) -> Option<&str> {
        self.video
            .as_ref()
            .and_then(|v| v.url.as_ref())
            .and_then(|u| u.default.as_deref())
    }
}
