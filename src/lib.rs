//! quote-harvest: a sequential scraper for paginated quote listings
//!
//! This crate fetches numbered listing pages from a quotes site one at a
//! time, extracts quote records (text, author, tags) from each page, and
//! serializes the accumulated records to a CSV file.

pub mod collector;
pub mod config;
pub mod output;
pub mod record;

use collector::MissingField;
use thiserror::Error;

/// Main error type for quote-harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request error for page {page}: {source}")]
    Request { page: u32, source: reqwest::Error },

    #[error("HTTP {status} fetching page {page} before any pages were retrieved")]
    Transport { page: u32, status: u16 },

    #[error("Malformed quote block on page {page}: item {item} is missing its {missing} element")]
    MalformedItem {
        page: u32,
        item: usize,
        missing: MissingField,
    },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for quote-harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use collector::{collect, Collector, Harvest, PageOutcome, Termination};
pub use config::Config;
pub use output::write_csv;
pub use record::Quote;
