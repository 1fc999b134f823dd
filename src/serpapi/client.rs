// HTTP client for the SerpAPI Google search endpoint.
//
// One GET per keyword, parameters pinned to google.com / English / top 10.
// The country code is threaded into both `location` and `gl`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::traits::{ResultFetcher, SearchQuery};
use super::RESULT_COUNT;

/// Default SerpAPI endpoint.
pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search";

/// One entry of the `organic_results` array.
///
/// SerpAPI returns a lot more per entry (title, snippet, position...);
/// only the link matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    pub link: Option<String>,
    pub position: Option<u32>,
}

/// The subset of a SerpAPI search response we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub organic_results: Option<Vec<OrganicResult>>,
    /// Set by SerpAPI on bad keys, exhausted quota, unknown locations.
    pub error: Option<String>,
}

impl SearchResponse {
    /// Links of the organic results in rank order, capped at `RESULT_COUNT`.
    ///
    /// Entries without a link are skipped. A response without
    /// `organic_results` yields an empty list.
    pub fn organic_urls(&self) -> Vec<String> {
        self.organic_results
            .iter()
            .flatten()
            .filter_map(|r| r.link.clone())
            .take(RESULT_COUNT)
            .collect()
    }
}

/// Client for the SerpAPI search endpoint.
pub struct SerpApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SerpApiClient {
    /// Create a client pointing at the given endpoint URL.
    ///
    /// Pass `DEFAULT_SERPAPI_URL` in production; tests point this at a
    /// local mock server.
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("serp-similarity/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Run a single search and deserialize the response body.
    ///
    /// The HTTP status is not checked: SerpAPI reports bad keys as a JSON
    /// body with an `error` field, which deserializes fine and simply has
    /// no organic results.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let num = RESULT_COUNT.to_string();
        let params = [
            ("engine", "google"),
            ("q", query.query.as_str()),
            ("location", query.country.as_str()),
            ("google_domain", "google.com"),
            ("gl", query.country.as_str()),
            ("hl", "en"),
            ("num", num.as_str()),
            ("api_key", query.api_key.as_str()),
        ];

        debug!(query = %query.query, country = %query.country, "SerpAPI search request");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .with_context(|| format!("SerpAPI request failed for {:?}", query.query))?;

        let status = response.status();
        let body: SearchResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse SerpAPI response (HTTP {status})"))?;

        Ok(body)
    }
}

#[async_trait]
impl ResultFetcher for SerpApiClient {
    async fn fetch_organic_urls(&self, query: &SearchQuery) -> Vec<String> {
        match self.search(query).await {
            Ok(response) => {
                if let Some(err) = &response.error {
                    warn!(query = %query.query, error = %err, "SerpAPI returned an error");
                }
                let urls = response.organic_urls();
                debug!(query = %query.query, count = urls.len(), "Fetched organic results");
                urls
            }
            Err(e) => {
                warn!(query = %query.query, error = %format!("{e:#}"), "Search failed");
                Vec::new()
            }
        }
    }
}
