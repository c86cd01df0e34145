//! HTML parsing utilities for scraped search pages.
//!
//! Thin wrappers around the `scraper` crate for CSS-selector based
//! extraction. The main consumer is the ShionLib source, which pulls the
//! embedded page-state script out of a server-rendered search page.
//!
//! # Examples
//!
//! ```rust
//! use galsearch::net::html;
//!
//! let page = r#"<script id="__NEXT_DATA__" type="application/json">{"props":{}}</script>"#;
//! let document = html::parse(page);
//! let state = html::select_text(&document, r#"script#__NEXT_DATA__"#).unwrap();
//! assert_eq!(state, r#"{"props":{}}"#);
//! ```

use scraper::{Html, Selector};

/// Parses an HTML document from a string.
pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// Extracts text content from the first element matching a CSS selector.
///
/// Returns the combined text content with surrounding whitespace trimmed,
/// or `None` when no element matches or the selector is invalid.
///
/// ```rust
/// use galsearch::net::html;
///
/// let document = html::parse(r#"<h3 class="title">CLANNAD</h3>"#);
/// assert_eq!(html::select_text(&document, ".title"), Some("CLANNAD".to_string()));
/// ```
pub fn select_text(html: &Html, selector: &str) -> Option<String> {
    Selector::parse(selector).ok().and_then(|sel| {
        html.select(&sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    })
}
