//! VTM.be HTTP Client

use reqwest::Client;
use tracing::warn;
use url::Url;

use super::error::VtmError;
use super::types::{ArticleEntry, FeedEnvelope, ProgramEntry};

/// Longform filter selecting full episodes on the video listing page.
/// Pre-encoded exactly as the site links to it.
const LONGFORM_FILTER: &str = "f[0]=sm_field_video_origin_cms_longform%3AVolledige%20afleveringen";

/// VTM.be HTTP Client
///
/// Fetches the JSON program/article feeds and the HTML listing and detail
/// pages. The base URL is injectable so tests can point the client at a
/// mock server.
pub struct VtmClient {
    base_url: String,
    client: Client,
}

impl VtmClient {
    /// Create a new VTM site client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Get current base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Listing page with the longform (full episodes) filter applied
    #[must_use]
    pub fn longform_listing_url(&self) -> String {
        format!("{}/video/?{}", self.base_url, LONGFORM_FILTER)
    }

    /// Turn a site-relative path into an absolute URL
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build the per-program article feed URL
    pub fn article_feed_url(&self, program_id: &str) -> Result<Url, VtmError> {
        let mut url = Url::parse(&format!("{}/feed/articles", self.base_url))
            .map_err(|e| VtmError::InvalidConfig(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("program", program_id)
            .append_pair("fields", "text,video")
            .append_pair("type", "all")
            .append_pair("sort", "mostRecent")
            .append_pair("count", "100")
            .append_pair("filterExcluded", "true");
        Ok(url)
    }

    /// Fetch the program feed.
    ///
    /// Entries that do not deserialize are skipped with a warning rather
    /// than failing the whole listing.
    pub async fn program_feed(&self) -> Result<Vec<ProgramEntry>, VtmError> {
        let mut url = Url::parse(&format!("{}/feed/programs", self.base_url))
            .map_err(|e| VtmError::InvalidConfig(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("type", "all")
            .append_pair("only_with_video", "true");

        let response = self.client.get(url).send().await?;
        let envelope: FeedEnvelope = response.json().await?;

        Ok(envelope
            .response
            .items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<ProgramEntry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed program feed entry");
                    None
                }
            })
            .collect())
    }

    /// Fetch a per-program article feed by its absolute URL
    pub async fn article_feed(&self, feed_url: &str) -> Result<Vec<ArticleEntry>, VtmError> {
        let response = self.client.get(feed_url).send().await?;
        let envelope: FeedEnvelope = response.json().await?;

        Ok(envelope
            .response
            .items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<ArticleEntry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed article feed entry");
                    None
                }
            })
            .collect())
    }

    /// Fetch a raw HTML page (listing or video detail)
    pub async fn page(&self, url: &str) -> Result<String, VtmError> {
        let response = self.client.get(url).send().await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_feed_url() {
        let client = VtmClient::new("http://vtm.be");
        let url = client.article_feed_url("870").unwrap();
        assert_eq!(url.path(), "/feed/articles");
        let query = url.query().unwrap();
        assert!(query.contains("program=870"));
        assert!(query.contains("fields=text%2Cvideo"));
        assert!(query.contains("sort=mostRecent"));
        assert!(query.contains("count=100"));
        assert!(query.contains("filterExcluded=true"));
    }

    #[test]
    fn test_longform_listing_url() {
        let client = VtmClient::new("http://vtm.be");
        assert_eq!(
            client.longform_listing_url(),
            "http://vtm.be/video/?f[0]=sm_field_video_origin_cms_longform%3AVolledige%20afleveringen"
        );
    }

    #[test]
    fn test_absolute_url() {
        let client = VtmClient::new("http://vtm.be");
        assert_eq!(
            client.absolute_url("video/volledige-afleveringen/x"),
            "http://vtm.be/video/volledige-afleveringen/x"
        );
        assert_eq!(
            client.absolute_url("/video/volledige-afleveringen/x"),
            "http://vtm.be/video/volledige-afleveringen/x"
        );
    }
}
