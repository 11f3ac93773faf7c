//! Quote-Harvest main entry point
//!
//! This is the command-line interface for the quote-harvest collector.

use clap::Parser;
use quote_harvest::collector::collect;
use quote_harvest::config::{load_config, validate, Config, MalformedItemPolicy};
use quote_harvest::output::write_csv;
use quote_harvest::{HarvestError, Termination};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quote-Harvest: a paginated quote collector
///
/// Quote-Harvest walks a quote site page by page, extracts every quote
/// block (text, author, tags), and saves the result as a CSV file. It
/// stops on the first missing or empty page and keeps whatever it has
/// when a page errors partway through.
#[derive(Parser, Debug)]
#[command(name = "quote-harvest")]
#[command(version = "0.1.0")]
#[command(about = "Collects quotes from a paginated site into CSV", long_about = None)]
struct Cli {
    /// Path for the CSV output file (overrides the configured path)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Base address of the quote site (overrides the configured address)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Drop quote blocks with missing fields instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to built-in defaults
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    // Apply command-line overrides, then re-check the result
    if let Some(base_url) = cli.base_url {
        config.source.base_url = base_url;
    }
    if cli.skip_malformed {
        config.extract.malformed_items = MalformedItemPolicy::Skip;
    }
    validate(&config).map_err(HarvestError::Config)?;

    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.csv_path));

    handle_harvest(&config, &output_path).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_harvest=info,warn"),
            1 => EnvFilter::new("quote_harvest=debug,info"),
            2 => EnvFilter::new("quote_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the main harvest operation
async fn handle_harvest(
    config: &Config,
    output_path: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let harvest = match collect(config).await {
        Ok(harvest) => harvest,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    // A transport error before any page landed means there is nothing
    // worth writing; surface it as the process result instead.
    if let Termination::TransportError { page, status } = harvest.termination {
        if harvest.pages_fetched == 0 {
            return Err(HarvestError::Transport { page, status }.into());
        }
        tracing::warn!(
            "Saving {} quotes collected before the error on page {}",
            harvest.quotes.len(),
            page
        );
    }

    write_csv(&harvest.quotes, output_path)?;

    println!(
        "✓ Saved {} quotes to {}",
        harvest.quotes.len(),
        output_path.display()
    );

    Ok(())
}
