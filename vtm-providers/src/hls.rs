//! HLS manifest resolution
//!
//! Resolves an adaptive-streaming manifest URL into ordered (url, bitrate)
//! pairs. Playlist syntax is delegated to the `m3u8-rs` collaborator; this
//! module only maps variants and joins relative URIs against the manifest
//! URL. A media playlist (no variants) yields the manifest itself at
//! bitrate 0.

use m3u8_rs::Playlist;
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// One playable stream alternative from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamVariant {
    pub url: String,
    /// Peak bandwidth in bits per second, 0 when unknown.
    pub bitrate: u64,
}

#[derive(Debug, Error)]
pub enum HlsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Manifest parse error: {0}")]
    Parse(String),

    #[error("Invalid manifest URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for HlsError {
    fn from(err: reqwest::Error) -> Self {
        HlsError::Network(err.to_string())
    }
}

/// Fetch a manifest and resolve it into stream variants.
pub async fn fetch_variants(
    client: &Client,
    manifest_url: &str,
) -> Result<Vec<StreamVariant>, HlsError> {
    let base_url = Url::parse(manifest_url).map_err(|e| HlsError::InvalidUrl(e.to_string()))?;
    let body = client.get(manifest_url).send().await?.bytes().await?;
    variants_from_playlist(&body, &base_url)
}

/// Resolve raw playlist bytes into stream variants.
pub fn variants_from_playlist(
    content: &[u8],
    base_url: &Url,
) -> Result<Vec<StreamVariant>, HlsError> {
    let playlist =
        m3u8_rs::parse_playlist_res(content).map_err(|e| HlsError::Parse(e.to_string()))?;

    match playlist {
        Playlist::MasterPlaylist(master) => master
            .variants
            .into_iter()
            .map(|variant| {
                let url = base_url
                    .join(&variant.uri)
                    .map_err(|e| HlsError::InvalidUrl(e.to_string()))?;
                Ok(StreamVariant {
                    url: url.to_string(),
                    bitrate: variant.bandwidth,
                })
            })
            .collect(),
        Playlist::MediaPlaylist(_) => Ok(vec![StreamVariant {
            url: base_url.to_string(),
            bitrate: 0,
        }]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER: &str = "#EXTM3U\n\
#EXT-X-STREAM-INF:BANDWIDTH=1280000,RESOLUTION=1280x720\n\
video_720p.m3u8\n\
#EXT-X-STREAM-INF:BANDWIDTH=2560000,RESOLUTION=1920x1080\n\
http://cdn.example.com/video_1080p.m3u8\n";

    const MEDIA: &str = "#EXTM3U\n\
#EXT-X-VERSION:3\n\
#EXT-X-TARGETDURATION:8\n\
#EXTINF:7.975,\n\
segment_0.ts\n\
#EXT-X-ENDLIST\n";

    #[test]
    fn test_master_playlist_variants() {
        let base = Url::parse("http://vod.example.com/path/master.m3u8").unwrap();
        let variants = variants_from_playlist(MASTER.as_bytes(), &base).unwrap();

        assert_eq!(variants.len(), 2);
        // relative URI joined against the manifest URL
        assert_eq!(variants[0].url, "http://vod.example.com/path/video_720p.m3u8");
        assert_eq!(variants[0].bitrate, 1280000);
        // absolute URI passed through
        assert_eq!(variants[1].url, "http://cdn.example.com/video_1080p.m3u8");
        assert_eq!(variants[1].bitrate, 2560000);
    }

    #[test]
    fn test_media_playlist_is_single_variant() {
        let base = Url::parse("http://vod.example.com/single.m3u8").unwrap();
        let variants = variants_from_playlist(MEDIA.as_bytes(), &base).unwrap();

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].url, "http://vod.example.com/single.m3u8");
        assert_eq!(variants[0].bitrate, 0);
    }

    #[test]
    fn test_master_without_variants_is_empty() {
        let base = Url::parse("http://vod.example.com/x.m3u8").unwrap();
        let master = "#EXTM3U\n#EXT-X-MEDIA:TYPE=AUDIO,GROUP-ID=\"aud\",NAME=\"Nederlands\"\n";
        let variants = variants_from_playlist(master.as_bytes(), &base).unwrap();
        assert!(variants.is_empty());
    }
}
