// Result fetcher trait and the per-request search query.
//
// The comparison pipeline only needs "give me the ranked URLs for this
// keyword". SerpApiClient implements it over HTTP; tests plug in a
// canned in-memory fetcher.

use async_trait::async_trait;

/// A single search request: credential, keyword and country.
///
/// Built per keyword and dropped after the fetch.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub api_key: String,
    pub query: String,
    /// Country/region code, always uppercase.
    pub country: String,
}

impl SearchQuery {
    /// Build a query, normalizing the country code to uppercase.
    ///
    /// No other validation happens here; missing inputs are caught
    /// before any query is built.
    pub fn new(api_key: &str, query: &str, country: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            query: query.to_string(),
            country: country.trim().to_uppercase(),
        }
    }
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchQuery")
            .field("api_key", &"****")
            .field("query", &self.query)
            .field("country", &self.country)
            .finish()
    }
}

/// Trait for fetching the ranked organic result URLs of a search.
#[async_trait]
pub trait ResultFetcher: Send + Sync {
    /// Return up to 10 result URLs in rank order.
    ///
    /// Infallible by contract: network errors, rejected credentials,
    /// malformed responses and genuinely empty searches all come back as
    /// an empty list.
    async fn fetch_organic_urls(&self, query: &SearchQuery) -> Vec<String>;
}
