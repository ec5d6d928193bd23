//! Medialaan wire types

use serde::Deserialize;

/// VOD playback authorization response
/// (`/api/1.0/item/<id>/video` → `{response: {uri: ...}}`).
#[derive(Debug, Deserialize)]
pub struct PlaybackResponse {
    pub response: PlaybackData,
}

#[derive(Debug, Deserialize)]
pub struct PlaybackData {
    #[serde(default)]
    pub uri: Option<String>,
}

/// One-shot playback token (`/user/v1/gigya/request_token` → `{response: <token>}`).
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub response: String,
}

/// Live manifest lookup (`{response: {url: {hls: ...}}}`).
#[derive(Debug, Deserialize)]
pub struct LiveResponse {
    pub response: LiveData,
}

#[derive(Debug, Deserialize)]
pub struct LiveData {
    #[serde(default)]
    pub url: Option<LiveUrls>,
}

#[derive(Debug, Deserialize)]
pub struct LiveUrls {
    #[serde(default)]
    pub hls: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_response() {
        let raw = r#"{"response": {"uri": "http://vod.example.com/master.m3u8"}}"#;
        let resp: PlaybackResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            resp.response.uri.as_deref(),
            Some("http://vod.example.com/master.m3u8")
        );
    }

    #[test]
    fn test_live_response_without_hls() {
        let raw = r#"{"response": {"url": {}}}"#;
        let resp: LiveResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.response.url.unwrap().hls.is_none());
    }
}
