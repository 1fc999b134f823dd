// Comparison pipeline: validate → fetch keyword 1 → fetch keyword 2 →
// similarity → table.
//
// The two fetches run strictly one after the other. Every run is
// independent; nothing is kept between runs.

use tracing::info;

use crate::comparison::{build_rows, ComparisonRow};
use crate::serpapi::traits::{ResultFetcher, SearchQuery};
use crate::similarity::{compare, SimilarityReport};

/// The four user inputs for one comparison.
#[derive(Clone, Default)]
pub struct ComparisonRequest {
    pub api_key: String,
    pub keyword1: String,
    pub keyword2: String,
    pub country: String,
}

impl ComparisonRequest {
    /// Names of the inputs that are empty (or whitespace only).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("API key", &self.api_key),
            ("Keyword 1", &self.keyword1),
            ("Keyword 2", &self.keyword2),
            ("Country code", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn query_for(&self, keyword: &str) -> SearchQuery {
        SearchQuery::new(&self.api_key, keyword, &self.country)
    }
}

/// A successful comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub keyword1_urls: Vec<String>,
    pub keyword2_urls: Vec<String>,
    pub report: SimilarityReport,
    pub rows: Vec<ComparisonRow>,
}

/// The three ways a run can end.
#[derive(Debug, Clone)]
pub enum ComparisonOutcome {
    /// Some inputs were empty; nothing was fetched.
    MissingInput(Vec<&'static str>),
    /// At least one keyword came back with no results.
    FetchFailed,
    Compared(Comparison),
}

/// Run one comparison end to end.
pub async fn run_comparison(
    fetcher: &dyn ResultFetcher,
    request: &ComparisonRequest,
) -> ComparisonOutcome {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return ComparisonOutcome::MissingInput(missing);
    }

    let keyword1_urls = fetcher
        .fetch_organic_urls(&request.query_for(&request.keyword1))
        .await;
    let keyword2_urls = fetcher
        .fetch_organic_urls(&request.query_for(&request.keyword2))
        .await;

    info!(
        keyword1_results = keyword1_urls.len(),
        keyword2_results = keyword2_urls.len(),
        "Fetched SERP results"
    );

    if keyword1_urls.is_empty() || keyword2_urls.is_empty() {
        return ComparisonOutcome::FetchFailed;
    }

    Comparison::from_results(keyword1_urls, keyword2_urls).into()
}

impl Comparison {
    /// Score and tabulate two already-fetched result lists.
    pub fn from_results(keyword1_urls: Vec<String>, keyword2_urls: Vec<String>) -> Self {
        let report = compare(&keyword1_urls, &keyword2_urls);
        let rows = build_rows(&keyword1_urls, &keyword2_urls, &report.matches);
        Self {
            keyword1_urls,
            keyword2_urls,
            report,
            rows,
        }
    }
}

impl From<Comparison> for ComparisonOutcome {
    fn from(comparison: Comparison) -> Self {
        ComparisonOutcome::Compared(comparison)
    }
}
