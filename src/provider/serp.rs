use super::traits::RankedListProvider;
use crate::config::SearchParams;
use crate::model::{ProviderError, RankedItem};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const SERP_ENDPOINT: &str = "https://serpapi.com/search.json";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for a SerpAPI-style ranked-list endpoint.
pub struct SerpClient {
    client: Client,
    api_key: String,
    params: SearchParams,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    position: Option<u32>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

impl SerpClient {
    pub fn new(api_key: String, params: SearchParams) -> Self {
        let client = Client::builder()
            .user_agent("brandlens/0.1")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build http client");
        Self {
            client,
            api_key,
            params,
        }
    }
}

#[async_trait::async_trait]
impl RankedListProvider for SerpClient {
    async fn search_page(
        &self,
        query: &str,
        offset: u32,
    ) -> Result<Vec<RankedItem>, ProviderError> {
        tracing::debug!(query, offset, "requesting result page");

        let start = offset.to_string();
        let response = self
            .client
            .get(SERP_ENDPOINT)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("num", "10"),
                ("start", start.as_str()),
                ("gl", self.params.gl.as_str()),
                ("hl", self.params.hl.as_str()),
                ("google_domain", self.params.google_domain.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        Ok(payload
            .organic_results
            .into_iter()
            .map(|r| RankedItem {
                position: r.position,
                title: r.title,
                snippet: r.snippet,
                link: r.link,
            })
            .collect())
    }
}
