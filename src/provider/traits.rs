use crate::model::{ProviderError, RankedItem, VideoStats};

/// A ranked-list provider returns one page of ordered results per call,
/// addressed by a start offset. Implemented by the live SerpAPI client and
/// by in-memory stubs in tests.
#[async_trait::async_trait]
pub trait RankedListProvider: Send + Sync {
    async fn search_page(
        &self,
        query: &str,
        offset: u32,
    ) -> Result<Vec<RankedItem>, ProviderError>;
}

/// A video-platform provider resolves a query to video IDs and the IDs to
/// per-video statistics.
#[async_trait::async_trait]
pub trait VideoProvider: Send + Sync {
    async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<String>, ProviderError>;

    async fn video_stats(&self, ids: &[String]) -> Result<Vec<VideoStats>, ProviderError>;
}
