//! HTML document extraction.
//!
//! Given a single archived HTML document, this module pulls out a title and a
//! bounded plain-text preview (for snapshot pages), or a headline (for news
//! articles). Parsing is tolerant: `scraper` recovers from arbitrarily broken
//! markup, so the only real failure mode is the file itself being unreadable.
//! Extraction failures are returned as errors for the caller to log and skip;
//! one bad document must never abort a directory scan.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

use crate::utils::truncate_for_log;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());
static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

/// Title substituted when a document has no `<title>` element.
pub const NO_TITLE: &str = "No Title";

/// Snippet substituted when a document yields no visible text at all.
pub const NO_CONTENT: &str = "No Content";

/// Hard upper bound on preview length, counted in characters.
///
/// The cutoff is a plain character count, not word-boundary aware. Downstream
/// consumers rely on this exact boundary, so it must not change.
pub const PREVIEW_CHAR_LIMIT: usize = 500;

/// Title and bounded text preview extracted from one snapshot page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePreview {
    /// The document title, or [`NO_TITLE`] if the page has none.
    pub title: String,
    /// Visible body text, newline-flattened, trimmed, and cut at
    /// [`PREVIEW_CHAR_LIMIT`] characters. May be empty for an empty page.
    pub preview: String,
}

/// Extract a title and text preview from the HTML document at `path`.
///
/// The title comes from the first `<title>` element ([`NO_TITLE`] when absent
/// or empty). The preview is all visible body text with newlines replaced by
/// single spaces, surrounding whitespace trimmed, and a hard cutoff at
/// [`PREVIEW_CHAR_LIMIT`] characters.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Malformed markup is not an
/// error; the parser recovers and extraction proceeds on whatever it found.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn extract_preview(path: &Path) -> Result<PagePreview, Box<dyn Error>> {
    let html = fs::read_to_string(path).await?;
    let document = Html::parse_document(&html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let body_text = document
        .select(&BODY_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();
    let preview = clip_chars(body_text.replace('\n', " ").trim(), PREVIEW_CHAR_LIMIT);

    debug!(
        title = %title,
        preview = %truncate_for_log(&preview, 80),
        "Extracted page preview"
    );
    Ok(PagePreview { title, preview })
}

/// Extract the headline (first `<h1>`) from the HTML document at `path`.
///
/// When the document has no `<h1>`, the caller-supplied `fallback` (usually
/// the article's folder name) is returned instead. Either way the result is
/// trimmed of surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn extract_headline(path: &Path, fallback: &str) -> Result<String, Box<dyn Error>> {
    let html = fs::read_to_string(path).await?;
    let document = Html::parse_document(&html);

    let headline = document
        .select(&H1_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_else(|| fallback.to_string());

    Ok(headline.trim().to_string())
}

/// Cut a string at `max` characters (not bytes).
fn clip_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
