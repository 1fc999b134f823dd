// SERP similarity: how many URLs two result lists share.
//
// The score is the size of the intersection as a percentage of the fixed
// number of result slots (10), not of the actual list lengths:
//
//   score = |A ∩ B| / 10 * 100
//
// A search that returns fewer than 10 results still divides by 10.

use std::collections::BTreeSet;

/// Number of result slots the score is normalized against.
pub const SLOT_COUNT: usize = crate::serpapi::RESULT_COUNT;

/// URLs present in both result lists.
pub type MatchSet = BTreeSet<String>;

/// Outcome of comparing two result lists.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityReport {
    /// Percentage from 0.0 to 100.0.
    pub score: f64,
    pub matches: MatchSet,
}

/// Compare two ranked URL lists.
///
/// If either list is empty the score is 0 and there are no matches.
pub fn compare(urls_a: &[String], urls_b: &[String]) -> SimilarityReport {
    if urls_a.is_empty() || urls_b.is_empty() {
        return SimilarityReport {
            score: 0.0,
            matches: MatchSet::new(),
        };
    }

    let set_a: BTreeSet<&String> = urls_a.iter().collect();
    let matches: MatchSet = urls_b
        .iter()
        .filter(|url| set_a.contains(url))
        .cloned()
        .collect();

    let score = matches.len() as f64 / SLOT_COUNT as f64 * 100.0;

    SimilarityReport { score, matches }
}
