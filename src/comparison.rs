// Rank-by-rank comparison table.
//
// Row i pairs the i-th result of each keyword. The pairing is positional:
// two URLs on the same row are not implied to be the same page.

use crate::similarity::{MatchSet, SLOT_COUNT};

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    /// 1-based rank.
    pub rank: u32,
    /// Empty when keyword 1 returned fewer results than this rank.
    pub keyword1_url: String,
    /// Empty when keyword 2 returned fewer results than this rank.
    pub keyword2_url: String,
    pub matched: bool,
}

impl ComparisonRow {
    /// Symbol used for the match column in the table and the CSV export.
    pub fn match_symbol(&self) -> &'static str {
        match_symbol(self.matched)
    }
}

pub const MATCH_SYMBOL: &str = "✅";
pub const NO_MATCH_SYMBOL: &str = "❌";

pub fn match_symbol(matched: bool) -> &'static str {
    if matched {
        MATCH_SYMBOL
    } else {
        NO_MATCH_SYMBOL
    }
}

/// Build the comparison table: always `SLOT_COUNT` rows, short lists
/// padded with empty URLs.
///
/// A row is flagged as matched if either of its non-empty URLs is in
/// `matches`. This is a row-level OR, not an equality check between the
/// two URLs on the row.
pub fn build_rows(urls1: &[String], urls2: &[String], matches: &MatchSet) -> Vec<ComparisonRow> {
    (0..SLOT_COUNT)
        .map(|i| {
            let keyword1_url = urls1.get(i).cloned().unwrap_or_default();
            let keyword2_url = urls2.get(i).cloned().unwrap_or_default();
            let is_match = |url: &str| !url.is_empty() && matches.contains(url);
            let matched = is_match(keyword1_url.as_str()) || is_match(keyword2_url.as_str());

            ComparisonRow {
                rank: i as u32 + 1,
                keyword1_url,
                keyword2_url,
                matched,
            }
        })
        .collect()
}
