//! Pagination loop and run orchestration
//!
//! This module contains the collector that drives a run end to end:
//! - Fetching numbered pages starting at 1, one at a time
//! - Delegating record extraction and applying the malformed-item policy
//! - Deciding when to stop (not-found, empty page, or transport error)
//! - Accumulating records in page-then-in-page order
//!
//! The loop is strictly sequential: each fetch is awaited to completion
//! before the next page index is considered.

use crate::collector::extract::{extract_quotes, ParsedPage};
use crate::collector::fetcher::{self, build_http_client, PageFetch};
use crate::config::{Config, MalformedItemPolicy};
use crate::record::Quote;
use crate::{HarvestError, Result};
use reqwest::Client;
use url::Url;

/// Record-level result of fetching one page
#[derive(Debug)]
pub enum PageOutcome {
    /// The page does not exist, which is the normal end-of-data signal
    NotFound,

    /// Any other non-success status; the run ends with what it has
    TransportError {
        /// The HTTP status code
        status: u16,
    },

    /// Extracted records plus the page's quote block count
    Success {
        /// Records surviving the malformed-item policy, in page order
        quotes: Vec<Quote>,

        /// Number of quote blocks on the page, malformed ones included
        blocks: usize,
    },
}

/// Why the pagination loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The page does not exist; all available pages were retrieved
    NotFound { page: u32 },

    /// The page exists but has no quote blocks, treated as end-of-data
    EmptyPage { page: u32 },

    /// The page failed with a non-404 error status
    TransportError { page: u32, status: u16 },
}

impl Termination {
    /// Returns true if the run stopped on a transport error rather than a
    /// normal end-of-data sentinel
    pub fn is_error(&self) -> bool {
        matches!(self, Termination::TransportError { .. })
    }
}

/// Result of one collection run
#[derive(Debug)]
pub struct Harvest {
    /// All extracted records, in page-then-in-page order of discovery
    pub quotes: Vec<Quote>,

    /// Number of pages fetched and processed, not counting the page that
    /// stopped the loop
    pub pages_fetched: u32,

    /// Why the pagination loop stopped
    pub termination: Termination,
}

impl Harvest {
    /// Returns true if the run reached the end of the data normally
    pub fn is_complete(&self) -> bool {
        !self.termination.is_error()
    }
}

/// Drives page-by-page retrieval, extraction, and termination for one run
///
/// The collector owns the HTTP client, the injected base address, and the
/// malformed-item policy. It holds no other state; the record accumulator
/// lives on the stack of [`Collector::run`].
pub struct Collector {
    client: Client,
    base_url: Url,
    policy: MalformedItemPolicy,
}

impl Collector {
    /// Creates a collector from the configuration
    ///
    /// The base address is parsed and normalized to end with `/` so page
    /// paths append rather than replace its last segment.
    ///
    /// # Arguments
    ///
    /// * `config` - The harvest configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Collector)` - Ready to run
    /// * `Err(HarvestError)` - The base URL is malformed or the HTTP client
    ///   could not be built
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = normalize_base_url(Url::parse(&config.source.base_url)?);
        let client = build_http_client(&config.fetch)?;

        Ok(Self {
            client,
            base_url,
            policy: config.extract.malformed_items,
        })
    }

    /// Fetches one page and extracts its records
    ///
    /// Composes the transport fetch with extraction and the malformed-item
    /// policy. Status-code outcomes (404, other non-2xx) are values, not
    /// errors; network-level failures and policy violations are errors.
    /// The outcome carries the page's quote block count so the pagination
    /// loop can tell an empty page from one whose blocks were all skipped.
    ///
    /// # Arguments
    ///
    /// * `page` - The page index, starting at 1
    pub async fn fetch_page(&self, page: u32) -> Result<PageOutcome> {
        match fetcher::fetch_page(&self.client, &self.base_url, page).await? {
            PageFetch::NotFound => Ok(PageOutcome::NotFound),
            PageFetch::TransportError { status } => Ok(PageOutcome::TransportError { status }),
            PageFetch::Html { body } => {
                let parsed = extract_quotes(&body)?;
                let blocks = parsed.block_count();
                let quotes = self.apply_policy(page, parsed)?;
                Ok(PageOutcome::Success { quotes, blocks })
            }
        }
    }

    /// Runs the pagination loop until a sentinel or error stops it
    ///
    /// # Termination
    ///
    /// 1. Start at page 1.
    /// 2. On `NotFound`, stop normally with everything accumulated so far.
    /// 3. On `TransportError`, report it and stop with everything
    ///    accumulated so far (incomplete, not crashed).
    /// 4. On a successful page with no quote blocks at all, stop normally.
    ///    Records dropped by the skip policy do not make a page empty.
    /// 5. Otherwise append the page's records in order, increment the page
    ///    index by exactly 1, and continue.
    ///
    /// # Returns
    ///
    /// * `Ok(Harvest)` - Accumulated records plus the termination reason
    /// * `Err(HarvestError)` - A network-level failure or a malformed item
    ///   under the `fail` policy
    pub async fn run(&self) -> Result<Harvest> {
        let mut quotes = Vec::new();
        let mut pages_fetched = 0u32;
        let mut page = 1u32;

        tracing::info!("Collecting quotes from {}", self.base_url);

        let termination = loop {
            match self.fetch_page(page).await? {
                PageOutcome::NotFound => {
                    tracing::debug!("Page {} not found, end of data", page);
                    break Termination::NotFound { page };
                }
                PageOutcome::TransportError { status } => {
                    tracing::error!("Error during page load {}: HTTP {}", page, status);
                    break Termination::TransportError { page, status };
                }
                PageOutcome::Success {
                    quotes: records,
                    blocks,
                } => {
                    if blocks == 0 {
                        tracing::debug!("Page {} has no quote blocks, end of data", page);
                        break Termination::EmptyPage { page };
                    }

                    tracing::debug!("Page {}: {} quotes", page, records.len());
                    quotes.extend(records);
                    pages_fetched += 1;
                    page += 1;
                }
            }
        };

        tracing::info!(
            "Collected {} quotes from {} pages",
            quotes.len(),
            pages_fetched
        );

        Ok(Harvest {
            quotes,
            pages_fetched,
            termination,
        })
    }

    /// Applies the malformed-item policy to one page's extraction result
    ///
    /// Under `fail` the first malformed block aborts the run; under `skip`
    /// each malformed block is logged and dropped while well-formed blocks
    /// are kept in order.
    fn apply_policy(&self, page: u32, parsed: ParsedPage) -> Result<Vec<Quote>> {
        if !parsed.malformed.is_empty() {
            match self.policy {
                MalformedItemPolicy::Fail => {
                    let bad = parsed.malformed[0];
                    return Err(HarvestError::MalformedItem {
                        page,
                        item: bad.index,
                        missing: bad.missing,
                    });
                }
                MalformedItemPolicy::Skip => {
                    for bad in &parsed.malformed {
                        tracing::warn!(
                            "Skipping malformed quote block {} on page {}: missing {}",
                            bad.index,
                            page,
                            bad.missing
                        );
                    }
                }
            }
        }

        Ok(parsed.quotes)
    }
}

/// Ensures the base address path ends with `/`
///
/// `Url::join` replaces the last path segment when the base does not end
/// with a slash, which would silently drop part of the configured address.
fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::extract::{MalformedItem, MissingField};

    fn create_test_config(policy: MalformedItemPolicy) -> Config {
        let mut config = Config::default();
        config.extract.malformed_items = policy;
        config
    }

    fn sample_quote(text: &str) -> Quote {
        Quote {
            text: text.to_string(),
            author: "A. Author".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_normalize_base_url_adds_trailing_slash() {
        let url = Url::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(normalize_base_url(url).as_str(), "http://127.0.0.1:8080/");

        let url = Url::parse("https://quotes.example.org/mirror").unwrap();
        assert_eq!(
            normalize_base_url(url).as_str(),
            "https://quotes.example.org/mirror/"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_existing_slash() {
        let url = Url::parse("https://quotes.toscrape.com/").unwrap();
        assert_eq!(
            normalize_base_url(url).as_str(),
            "https://quotes.toscrape.com/"
        );
    }

    #[test]
    fn test_collector_rejects_malformed_base_url() {
        let mut config = Config::default();
        config.source.base_url = "not a url".to_string();
        assert!(Collector::new(&config).is_err());
    }

    #[test]
    fn test_apply_policy_fail_aborts_with_detail() {
        let collector = Collector::new(&create_test_config(MalformedItemPolicy::Fail)).unwrap();
        let parsed = ParsedPage {
            quotes: vec![sample_quote("“Kept?”")],
            malformed: vec![MalformedItem {
                index: 1,
                missing: MissingField::Author,
            }],
        };

        let err = collector.apply_policy(3, parsed).unwrap_err();
        match err {
            HarvestError::MalformedItem {
                page,
                item,
                missing,
            } => {
                assert_eq!(page, 3);
                assert_eq!(item, 1);
                assert_eq!(missing, MissingField::Author);
            }
            other => panic!("expected MalformedItem, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_policy_skip_keeps_well_formed_quotes() {
        let collector = Collector::new(&create_test_config(MalformedItemPolicy::Skip)).unwrap();
        let parsed = ParsedPage {
            quotes: vec![sample_quote("“First.”"), sample_quote("“Third.”")],
            malformed: vec![MalformedItem {
                index: 1,
                missing: MissingField::Text,
            }],
        };

        let quotes = collector.apply_policy(1, parsed).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].text, "“First.”");
        assert_eq!(quotes[1].text, "“Third.”");
    }

    #[test]
    fn test_apply_policy_clean_page_passes_through() {
        let collector = Collector::new(&create_test_config(MalformedItemPolicy::Fail)).unwrap();
        let parsed = ParsedPage {
            quotes: vec![sample_quote("“Clean.”")],
            malformed: vec![],
        };

        let quotes = collector.apply_policy(1, parsed).unwrap();
        assert_eq!(quotes.len(), 1);
    }

    #[test]
    fn test_termination_is_error() {
        assert!(!Termination::NotFound { page: 3 }.is_error());
        assert!(!Termination::EmptyPage { page: 3 }.is_error());
        assert!(Termination::TransportError {
            page: 3,
            status: 500
        }
        .is_error());
    }

    #[test]
    fn test_harvest_is_complete() {
        let harvest = Harvest {
            quotes: vec![],
            pages_fetched: 0,
            termination: Termination::NotFound { page: 1 },
        };
        assert!(harvest.is_complete());

        let harvest = Harvest {
            quotes: vec![],
            pages_fetched: 0,
            termination: Termination::TransportError {
                page: 1,
                status: 503,
            },
        };
        assert!(!harvest.is_complete());
    }
}
