//! Page collection functionality
//!
//! This module handles the retrieval side of a harvest:
//! - HTTP client construction and page address derivation
//! - Sequential page fetching with status-code triage
//! - Record extraction from quote blocks
//! - The pagination loop with its termination rules

mod extract;
mod fetcher;
mod pagination;

pub use extract::{extract_quotes, MalformedItem, MissingField, ParsedPage};
pub use fetcher::{build_http_client, fetch_page, page_url, PageFetch};
pub use pagination::{Collector, Harvest, PageOutcome, Termination};

use crate::config::Config;
use crate::Result;

/// Runs a complete harvest with the given configuration
///
/// Builds a [`Collector`] and drives the pagination loop to completion.
/// This is the main entry point for library users.
///
/// # Arguments
///
/// * `config` - The harvest configuration
///
/// # Returns
///
/// * `Ok(Harvest)` - Accumulated records plus the termination reason
/// * `Err(HarvestError)` - Configuration, network, or extraction failure
///
/// # Example
///
/// ```no_run
/// use quote_harvest::{collect, Config};
///
/// # async fn example() -> quote_harvest::Result<()> {
/// let config = Config::default();
/// let harvest = collect(&config).await?;
/// println!("{} quotes", harvest.quotes.len());
/// # Ok(())
/// # }
/// ```
pub async fn collect(config: &Config) -> Result<Harvest> {
    Collector::new(config)?.run().await
}
