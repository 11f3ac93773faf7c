use serde::Deserialize;

/// Main configuration structure for quote-harvest
///
/// Every section is optional; an absent section (or an absent config file
/// altogether) falls back to the built-in defaults, so the tool runs with
/// no configuration at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Source site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Base address pages are fetched from; page URLs are formed by
    /// appending `page/<n>/`
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://quotes.toscrape.com/".to_string(),
        }
    }
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// User agent string sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total per-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("quote-harvest/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Extraction behavior configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractConfig {
    /// What to do with a quote block missing its text or author element
    #[serde(rename = "malformed-items", default)]
    pub malformed_items: MalformedItemPolicy,
}

/// Policy for quote blocks missing a required element
///
/// The default aborts the whole run rather than silently undercounting.
/// Skipping is available but must be chosen explicitly, and every skipped
/// block is logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedItemPolicy {
    /// Abort the run on the first malformed block
    #[default]
    Fail,

    /// Drop malformed blocks, log each at WARN, and keep going
    Skip,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the CSV file is written to (truncating any prior content)
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "quotes.csv".to_string(),
        }
    }
}
