//! Configuration module for quote-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section is optional; a missing file or section falls back
//! to built-in defaults, so the tool runs unconfigured.
//!
//! # Example
//!
//! ```no_run
//! use quote_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping from: {}", config.source.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ExtractConfig, FetchConfig, MalformedItemPolicy, OutputConfig, SourceConfig,
};

// Re-export parser functions
pub use parser::load_config;

// Re-export validation
pub use validation::validate;
