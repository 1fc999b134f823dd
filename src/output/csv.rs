// CSV export of the comparison table.
//
// Layout: header row, then one row per rank.
//   Rank,Keyword 1 URL,Keyword 2 URL,Match?
// Missing URLs are empty fields; the match column holds ✅ or ❌.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::comparison::{ComparisonRow, MATCH_SYMBOL, NO_MATCH_SYMBOL};

/// Default file name for the export.
pub const DEFAULT_FILE_NAME: &str = "serp_similarity_results.csv";

/// MIME type of the export.
pub const MIME_TYPE: &str = "text/csv";

pub const HEADERS: [&str; 4] = ["Rank", "Keyword 1 URL", "Keyword 2 URL", "Match?"];

/// Serialize rows to UTF-8 CSV bytes, header included.
pub fn to_csv_bytes(rows: &[ComparisonRow]) -> Result<Vec<u8>> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADERS)
        .context("Failed to write CSV header")?;

    for row in rows {
        writer
            .write_record([
                row.rank.to_string().as_str(),
                row.keyword1_url.as_str(),
                row.keyword2_url.as_str(),
                row.match_symbol(),
            ])
            .with_context(|| format!("Failed to write CSV row {}", row.rank))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))
}

/// Write the table to `path`, replacing any existing file.
pub fn write_csv(path: &Path, rows: &[ComparisonRow]) -> Result<()> {
    let bytes = to_csv_bytes(rows)?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), rows = rows.len(), "Comparison exported");
    Ok(())
}

/// Parse an exported table back into rows.
///
/// Fails if the header does not match or a row is malformed.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<ComparisonRow>> {
    let mut reader = ::csv::Reader::from_reader(bytes);

    let headers = reader.headers().context("Failed to read CSV header")?;
    if headers.iter().ne(HEADERS.iter().copied()) {
        anyhow::bail!("Unexpected CSV header: {:?}", headers);
    }

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", i + 1))?;
        if record.len() != HEADERS.len() {
            anyhow::bail!("CSV row {} has {} fields, expected 4", i + 1, record.len());
        }
        let rank: u32 = record[0]
            .parse()
            .with_context(|| format!("Invalid rank {:?} in CSV row {}", &record[0], i + 1))?;
        let matched = match &record[3] {
            s if s == MATCH_SYMBOL => true,
            s if s == NO_MATCH_SYMBOL => false,
            other => anyhow::bail!("Invalid match symbol {:?} in CSV row {}", other, i + 1),
        };
        rows.push(ComparisonRow {
            rank,
            keyword1_url: record[1].to_string(),
            keyword2_url: record[2].to_string(),
            matched,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_first() {
        let bytes = to_csv_bytes(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "Rank,Keyword 1 URL,Keyword 2 URL,Match?\n");
    }

    #[test]
    fn url_with_comma_is_quoted() {
        let rows = vec![ComparisonRow {
            rank: 1,
            keyword1_url: "https://a.example/?q=a,b".to_string(),
            keyword2_url: String::new(),
            matched: false,
        }];
        let text = String::from_utf8(to_csv_bytes(&rows).unwrap()).unwrap();
        assert!(text.contains("1,\"https://a.example/?q=a,b\",,❌"));
    }

    #[test]
    fn rejects_unknown_header() {
        let err = parse_csv(b"a,b,c,d\n").unwrap_err();
        assert!(err.to_string().contains("Unexpected CSV header"));
    }

    #[test]
    fn rejects_bad_match_symbol() {
        let err = parse_csv("Rank,Keyword 1 URL,Keyword 2 URL,Match?\n1,a,b,yes\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("Invalid match symbol"));
    }
}
