//! Output module for persisting harvest results
//!
//! This module handles:
//! - Writing harvested records to CSV with a fixed column header
//! - Escaping record fields so embedded delimiters survive round trips

mod writer;

pub use writer::{write_csv, write_csv_to, OutputError, OutputResult};
