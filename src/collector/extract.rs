//! HTML extraction of quote records
//!
//! This module parses a listing page body and extracts one record per
//! quote block:
//! - Item blocks are located by the `.quote` marker
//! - Each block yields exactly one text (`.text`), one author (`.author`),
//!   and zero or more tags (`.tags .tag`)
//! - A block missing its text or author element is reported as malformed
//!   data rather than crashing or being silently dropped; the caller
//!   decides what to do with it
//!
//! Extraction is a pure function of the page content: the same input
//! always yields structurally equal output.

use crate::record::Quote;
use crate::HarvestError;
use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// Marker for one item block
const QUOTE_SELECTOR: &str = ".quote";
/// Sub-marker for the quoted text within a block
const TEXT_SELECTOR: &str = ".text";
/// Sub-marker for the author name within a block
const AUTHOR_SELECTOR: &str = ".author";
/// Sub-marker for each tag label within a block
const TAG_SELECTOR: &str = ".tags .tag";

/// Extracted contents of one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Well-formed quotes in the order they appear on the page
    pub quotes: Vec<Quote>,

    /// Malformed quote blocks encountered alongside them
    pub malformed: Vec<MalformedItem>,
}

impl ParsedPage {
    /// Total number of quote blocks on the page, malformed ones included
    pub fn block_count(&self) -> usize {
        self.quotes.len() + self.malformed.len()
    }
}

/// A quote block missing a required element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedItem {
    /// Zero-based index of the block among the page's quote blocks
    pub index: usize,

    /// Which required element was absent
    pub missing: MissingField,
}

/// Required quote block elements that can be absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// The `.text` element
    Text,
    /// The `.author` element
    Author,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Text => write!(f, "text"),
            MissingField::Author => write!(f, "author"),
        }
    }
}

/// Extracts quote records from a listing page body
///
/// Tag absence is valid and yields an empty tag list. Text and author
/// absence marks the block malformed; well-formed blocks on the same page
/// are still returned, in order.
///
/// # Arguments
///
/// * `html` - The page body content
///
/// # Returns
///
/// * `Ok(ParsedPage)` - Extracted quotes plus any malformed blocks
/// * `Err(HarvestError)` - A selector failed to compile
///
/// # Example
///
/// ```
/// use quote_harvest::collector::extract_quotes;
///
/// let html = r#"<div class="quote">
///     <span class="text">“So it goes.”</span>
///     <small class="author">Kurt Vonnegut</small>
/// </div>"#;
/// let parsed = extract_quotes(html).unwrap();
/// assert_eq!(parsed.quotes.len(), 1);
/// assert_eq!(parsed.quotes[0].author, "Kurt Vonnegut");
/// ```
pub fn extract_quotes(html: &str) -> Result<ParsedPage, HarvestError> {
    let document = Html::parse_document(html);

    let quote_selector = compile(QUOTE_SELECTOR)?;
    let text_selector = compile(TEXT_SELECTOR)?;
    let author_selector = compile(AUTHOR_SELECTOR)?;
    let tag_selector = compile(TAG_SELECTOR)?;

    let mut quotes = Vec::new();
    let mut malformed = Vec::new();

    for (index, block) in document.select(&quote_selector).enumerate() {
        match parse_quote_block(&block, &text_selector, &author_selector, &tag_selector) {
            Ok(quote) => quotes.push(quote),
            Err(missing) => malformed.push(MalformedItem { index, missing }),
        }
    }

    Ok(ParsedPage { quotes, malformed })
}

/// Compiles a CSS selector, surfacing failures as errors instead of panics
fn compile(selector: &str) -> Result<Selector, HarvestError> {
    Selector::parse(selector).map_err(|e| HarvestError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Parses a single quote block into a record
///
/// Returns the missing field if the block lacks its text or author element.
fn parse_quote_block(
    block: &ElementRef,
    text_selector: &Selector,
    author_selector: &Selector,
    tag_selector: &Selector,
) -> Result<Quote, MissingField> {
    let text = element_text(block, text_selector).ok_or(MissingField::Text)?;
    let author = element_text(block, author_selector).ok_or(MissingField::Author)?;

    let tags = block
        .select(tag_selector)
        .map(|tag| tag.text().collect::<String>())
        .collect();

    Ok(Quote { text, author, tags })
}

/// Returns the concatenated text content of the first matching descendant
///
/// The text is taken verbatim, without trimming.
fn element_text(block: &ElementRef, selector: &Selector) -> Option<String> {
    block
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
}
