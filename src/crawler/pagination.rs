//! Result-page count resolution
//!
//! The directory renders a pagination banner on the first result page reading
//! `"Page 1 of N | Total Records : M"`. The fourth whitespace token is the
//! total page count. Small result sets render without the banner at all, so
//! a missing marker means a single page rather than an error.

use scraper::{Html, Selector};

const PAGINATION_MARKER: &str = "div.text-center.pagination-text";

/// Resolved page count for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCount {
    /// Total number of result pages, always >= 1
    pub pages: u32,

    /// Present when the marker existed but could not be parsed; the count
    /// then defaulted to 1 and the reason should be logged as a warning
    pub fallback: Option<String>,
}

impl PageCount {
    fn single() -> Self {
        Self {
            pages: 1,
            fallback: None,
        }
    }

    fn fallback(reason: String) -> Self {
        Self {
            pages: 1,
            fallback: Some(reason),
        }
    }
}

/// Determines the total number of result pages from the first page
///
/// Never fails: a document without a pagination banner is a single-page
/// result set, and a banner that cannot be parsed falls back to one page
/// with a warning reason attached.
pub fn resolve_page_count(doc: &Html) -> PageCount {
    let Ok(marker) = Selector::parse(PAGINATION_MARKER) else {
        return PageCount::single();
    };

    let Some(element) = doc.select(&marker).next() else {
        // Few matches render without pager controls.
        return PageCount::single();
    };

    let text = element.text().collect::<String>();

    // "Page 1 of 25 | Total Records : 245"
    let Some(token) = text.split_whitespace().nth(3) else {
        return PageCount::fallback(format!(
            "unexpected pagination text '{}'",
            text.trim()
        ));
    };

    match token.parse::<u32>() {
        Ok(pages) if pages >= 1 => PageCount {
            pages,
            fallback: None,
        },
        _ => PageCount::fallback(format!("non-numeric page total '{}'", token)),
    }
}
