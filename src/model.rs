// Core structs: search items, video stats, aggregation rows
use chrono::{DateTime, Utc};
use thiserror::Error;

/// One ranked result as the provider returns it. Positions are provider
/// assigned and 1-based; absent fields default to empty so a single bad
/// item never aborts a batch.
#[derive(Debug, Clone)]
pub struct RankedItem {
    pub position: Option<u32>,
    pub title: String,
    pub snippet: String,
    pub link: String,
}

/// A ranked result with pagination bookkeeping attached. `page` is derived
/// from the fetch offset once, at fetch time, and never recomputed.
#[derive(Debug, Clone)]
pub struct SearchResultItem {
    pub position: Option<u32>,
    pub page: u32,
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub fetched_at: DateTime<Utc>,
}

/// A search item annotated with its matched brand and visibility weight.
/// `brand` is None when no synonym matched; such items are kept for the
/// detection export but excluded from aggregation.
#[derive(Debug, Clone)]
pub struct ClassifiedItem {
    pub item: SearchResultItem,
    pub brand: Option<String>,
    pub score: f64,
}

/// Raw per-video statistics. Counts default to 0 when the provider omits
/// them or sends something unparsable.
#[derive(Debug, Clone)]
pub struct VideoStats {
    pub title: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
}

/// Video statistics tied to the brand query that found them, with the
/// derived engagement rate in [0, 100].
#[derive(Debug, Clone)]
pub struct VideoStatsItem {
    pub brand_query: String,
    pub title: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub engagement_rate: f64,
}

/// One row of the visibility summary: summed position weights per brand.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandScore {
    pub brand: String,
    pub score: f64,
}

/// One row of the engagement summary: mean engagement rate per brand query.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandEngagement {
    pub brand_query: String,
    pub avg_engagement_rate: f64,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing environment variable {0}")]
    MissingKey(&'static str),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("chart rendering failed: {0}")]
    Chart(String),
}
