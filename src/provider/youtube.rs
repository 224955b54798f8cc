use super::traits::VideoProvider;
use crate::model::{ProviderError, VideoStats};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the YouTube Data API v3 `search` and `videos` endpoints.
pub struct YouTubeClient {
    client: Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchListItem>,
}

#[derive(Debug, Deserialize)]
struct SearchListItem {
    #[serde(default)]
    id: SearchItemId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoListItem>,
}

#[derive(Debug, Deserialize)]
struct VideoListItem {
    #[serde(default)]
    snippet: VideoSnippet,
    #[serde(default)]
    statistics: VideoStatistics,
}

#[derive(Debug, Default, Deserialize)]
struct VideoSnippet {
    #[serde(default)]
    title: String,
}

// The Data API serializes counts as strings; anything absent or unparsable
// counts as zero rather than failing the batch.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

fn count(raw: &Option<String>) -> u64 {
    raw.as_deref().and_then(|s| s.parse().ok()).unwrap_or(0)
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .user_agent("brandlens/0.1")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build http client");
        Self { client, api_key }
    }
}

#[async_trait::async_trait]
impl VideoProvider for YouTubeClient {
    async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<String>, ProviderError> {
        tracing::debug!(query, max_results, "searching videos");

        let max = max_results.to_string();
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("part", "id,snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", max.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let payload: SearchListResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        // Non-video hits carry no videoId and are skipped.
        Ok(payload
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    async fn video_stats(&self, ids: &[String]) -> Result<Vec<VideoStats>, ProviderError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let response = self
            .client
            .get(VIDEOS_ENDPOINT)
            .query(&[
                ("part", "statistics,snippet"),
                ("id", joined.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let payload: VideoListResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        Ok(payload
            .items
            .into_iter()
            .map(|video| VideoStats {
                title: video.snippet.title,
                views: count(&video.statistics.view_count),
                likes: count(&video.statistics.like_count),
                comments: count(&video.statistics.comment_count),
            })
            .collect())
    }
}
