// SerpAPI result fetching.
//
// SearchQuery + ResultFetcher define what the pipeline asks for;
// SerpApiClient answers it with one GET against serpapi.com per keyword.

pub mod client;
pub mod traits;

/// Number of results requested per search, and the most a fetch returns.
pub const RESULT_COUNT: usize = 10;
