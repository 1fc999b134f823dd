use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use serp_similarity::config::Config;
use serp_similarity::output::{csv as csv_export, terminal};
use serp_similarity::pipeline::compare::{run_comparison, ComparisonOutcome, ComparisonRequest};
use serp_similarity::serpapi::client::SerpApiClient;

/// SERP similarity checker.
///
/// Compares the top 10 Google search results for two keywords (via SerpAPI)
/// and exports the rank-by-rank comparison as CSV.
#[derive(Parser)]
#[command(name = "serp-similarity", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the top 10 results of two keywords
    Compare {
        /// First keyword
        keyword1: String,

        /// Second keyword
        keyword2: String,

        /// SerpAPI key (defaults to SERPAPI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Country code, e.g. US or IN (defaults to SERP_COUNTRY)
        #[arg(long)]
        country: Option<String>,

        /// Where to write the CSV export
        #[arg(long, short, default_value = csv_export::DEFAULT_FILE_NAME)]
        output: PathBuf,

        /// Skip writing the CSV export
        #[arg(long)]
        no_export: bool,
    },

    /// Display a previously exported comparison CSV
    Show {
        /// Path to the CSV file
        #[arg(default_value = csv_export::DEFAULT_FILE_NAME)]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("serp_similarity=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            keyword1,
            keyword2,
            api_key,
            country,
            output,
            no_export,
        } => {
            let config = Config::load()?;

            let request = ComparisonRequest {
                api_key: api_key.unwrap_or(config.serpapi_api_key),
                keyword1,
                keyword2,
                country: country.unwrap_or(config.country),
            };

            let client = SerpApiClient::new(&config.serpapi_url)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {msg}")
                    .context("Invalid spinner template")?,
            );
            spinner.set_message("Fetching SERP results...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = run_comparison(&client, &request).await;
            spinner.finish_and_clear();

            match outcome {
                ComparisonOutcome::MissingInput(missing) => {
                    terminal::display_missing_input(&missing);
                    std::process::exit(2);
                }
                ComparisonOutcome::FetchFailed => {
                    terminal::display_fetch_failed();
                    std::process::exit(1);
                }
                ComparisonOutcome::Compared(comparison) => {
                    terminal::display_summary(&comparison.report);
                    terminal::display_table(&comparison.rows);

                    if no_export {
                        info!("CSV export skipped");
                    } else {
                        csv_export::write_csv(&output, &comparison.rows)?;
                        println!(
                            "{} {} ({})",
                            "Saved comparison to".bold(),
                            output.display(),
                            csv_export::MIME_TYPE.dimmed()
                        );
                    }
                }
            }
        }

        Commands::Show { path } => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let rows = csv_export::parse_csv(&bytes)
                .with_context(|| format!("{} is not a comparison export", path.display()))?;
            terminal::display_table(&rows);
        }
    }

    Ok(())
}
