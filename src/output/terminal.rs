// Colored terminal output for the similarity report.
//
// Score first, then the shared URLs, then the full rank-by-rank table.

use colored::Colorize;

use crate::comparison::ComparisonRow;
use crate::similarity::SimilarityReport;

/// Widest URL shown in the table before truncation.
const URL_COLUMN_WIDTH: usize = 48;

/// Message shown when either keyword came back with no results.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch search results. Please check your API key, keywords, or country code.";

/// Format a score the way it is displayed, e.g. `20.00%`.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}%")
}

/// Display the score and the list of matching URLs.
pub fn display_summary(report: &SimilarityReport) {
    println!(
        "\n{} {}",
        "Similarity Score:".bold(),
        format_score(report.score).green().bold()
    );

    println!("\n{}", "=== Matching URLs ===".bold());
    if report.matches.is_empty() {
        println!("  {} No matching URLs found.", "❌".red());
    } else {
        for url in &report.matches {
            println!("  {} {}", "✅".green(), url);
        }
    }
}

/// Display the full comparison table.
pub fn display_table(rows: &[ComparisonRow]) {
    println!("\n{}", "=== Full Comparison Table ===".bold());
    println!();

    println!(
        "  {:>4}  {:<width$}  {:<width$}  {}",
        "Rank".dimmed(),
        "Keyword 1 URL".dimmed(),
        "Keyword 2 URL".dimmed(),
        "Match?".dimmed(),
        width = URL_COLUMN_WIDTH + 3,
    );
    println!("  {}", "-".repeat(URL_COLUMN_WIDTH * 2 + 20).dimmed());

    for row in rows {
        let url1 = super::truncate_chars(&row.keyword1_url, URL_COLUMN_WIDTH);
        let url2 = super::truncate_chars(&row.keyword2_url, URL_COLUMN_WIDTH);
        let mark = if row.matched {
            row.match_symbol().green()
        } else {
            row.match_symbol().red()
        };
        println!(
            "  {:>4}  {:<width$}  {:<width$}  {}",
            row.rank,
            url1,
            url2,
            mark,
            width = URL_COLUMN_WIDTH + 3,
        );
    }
    println!();
}

/// Display the generic failure shown when either fetch came back empty.
pub fn display_fetch_failed() {
    eprintln!("{} {}", "⚠".red().bold(), FETCH_FAILED_MESSAGE.red());
}

/// Display the validation warning for missing inputs.
pub fn display_missing_input(missing: &[&str]) {
    eprintln!(
        "{} {}",
        "⚠".yellow().bold(),
        "Please fill all fields before proceeding!".yellow()
    );
    for field in missing {
        eprintln!("  {} {}", "-".yellow(), field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_two_decimals() {
        assert_eq!(format_score(20.0), "20.00%");
        assert_eq!(format_score(0.0), "0.00%");
        assert_eq!(format_score(100.0), "100.00%");
    }
}
