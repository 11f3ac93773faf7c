//! HTTP fetcher implementation
//!
//! This module handles the transport half of page retrieval:
//! - Building the HTTP client with user agent and bounded timeouts
//! - Forming page URLs from the base address and a page index
//! - Issuing one GET per page and classifying the status code
//!
//! Record extraction and termination policy live in the pagination loop;
//! this layer only distinguishes "page body", "no such page", and
//! "transport failure".

use crate::config::FetchConfig;
use crate::HarvestError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Transport-level result of fetching one page
#[derive(Debug)]
pub enum PageFetch {
    /// The page does not exist (HTTP 404), the end-of-data sentinel
    NotFound,

    /// Any other non-success status; the run ends with what it has
    TransportError {
        /// The HTTP status code
        status: u16,
    },

    /// Successfully fetched the page
    Html {
        /// Page body content
        body: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// Every request carries the configured user agent and is bounded by the
/// configured total and connect timeouts, so a stalled page cannot hang
/// the run indefinitely.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Forms the URL for a numbered listing page: `<base>/page/<n>/`
///
/// # Arguments
///
/// * `base_url` - The base address (must end with `/` for the page path to
///   append rather than replace; `Collector::new` normalizes this)
/// * `page` - The page index, starting at 1
pub fn page_url(base_url: &Url, page: u32) -> Result<Url, url::ParseError> {
    base_url.join(&format!("page/{}/", page))
}

/// Fetches one listing page and classifies the outcome by status code
///
/// Status triage:
/// - 404 → `PageFetch::NotFound` (normal end-of-data sentinel)
/// - other non-2xx → `PageFetch::TransportError` (reported, ends the run)
/// - 2xx → `PageFetch::Html` with the response body
///
/// Network-level failures (connection refused, DNS, timeout) are not part
/// of the status triage; they propagate as hard errors carrying the page
/// number.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - The base address pages are fetched from
/// * `page` - The page index to fetch
pub async fn fetch_page(
    client: &Client,
    base_url: &Url,
    page: u32,
) -> Result<PageFetch, HarvestError> {
    let url = page_url(base_url, page)?;
    tracing::debug!("Fetching page {}: {}", page, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| HarvestError::Request { page, source: e })?;

    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Ok(PageFetch::NotFound);
    }

    if !status.is_success() {
        return Ok(PageFetch::TransportError {
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| HarvestError::Request { page, source: e })?;

    Ok(PageFetch::Html { body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> FetchConfig {
        FetchConfig {
            user_agent: "TestHarvester/1.0".to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_page_url_first_page() {
        let base = Url::parse("https://quotes.toscrape.com/").unwrap();
        let url = page_url(&base, 1).unwrap();
        assert_eq!(url.as_str(), "https://quotes.toscrape.com/page/1/");
    }

    #[test]
    fn test_page_url_increments() {
        let base = Url::parse("https://quotes.toscrape.com/").unwrap();
        let url = page_url(&base, 42).unwrap();
        assert_eq!(url.as_str(), "https://quotes.toscrape.com/page/42/");
    }

    #[test]
    fn test_page_url_with_port() {
        let base = Url::parse("http://127.0.0.1:8080/").unwrap();
        let url = page_url(&base, 3).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/page/3/");
    }
}
