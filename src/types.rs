//! Core data types for search results and search parameters.
//!
//! This module defines the fundamental data structures used throughout galsearch:
//!
//! - [`SearchResult`] - A normalized Galgame entry from any source
//! - [`SearchSource`] - The site a result originated from
//! - [`SearchParams`] - Parameters for running a search
//!
//! # Examples
//!
//! ```rust
//! use galsearch::types::*;
//!
//! let result = SearchResult {
//!     name: "CLANNAD".to_string(),
//!     link: "https://www.touchgal.us/clannad".to_string(),
//!     source: SearchSource::TouchGal,
//!     tags: vec!["恋爱".to_string()],
//!     rating: Some(9.2),
//! };
//!
//! assert_eq!(result.dedup_key(), "clannad");
//! ```

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default per-source result cap, matching the plugin-facing default.
pub const DEFAULT_LIMIT: usize = 5;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Placeholder title used when a source record carries no usable name.
pub const UNKNOWN_TITLE: &str = "未知游戏";

/// The content site a [`SearchResult`] came from.
///
/// TouchGal entries carry direct download resources and are preferred when
/// the same game shows up on both sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchSource {
    TouchGal,
    ShionLib,
}

impl SearchSource {
    /// Canonical label for this source, as shown in grouped output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSource::TouchGal => "TouchGal",
            SearchSource::ShionLib => "ShionLib",
        }
    }

    /// Emoji marker used by the message formatter to distinguish sources.
    pub fn icon(&self) -> &'static str {
        match self {
            SearchSource::TouchGal => "📦",
            SearchSource::ShionLib => "📚",
        }
    }
}

impl fmt::Display for SearchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized Galgame search result.
///
/// Every result that leaves a source fetcher has a non-empty `name` and an
/// absolute `link` to the game's detail page; records missing an identifier
/// on the source side are dropped before they get here.
///
/// # Fields
///
/// * `name` - Display title, original casing preserved
/// * `link` - Absolute URL to the detail page
/// * `source` - Which site produced this entry
/// * `tags` - Genre/label strings; empty for sources that don't expose them
/// * `rating` - Average score when the source provides one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display title
    pub name: String,

    /// Absolute detail-page URL
    pub link: String,

    /// Originating site
    pub source: SearchSource,

    /// Tags/genres
    #[serde(default)]
    pub tags: Vec<String>,

    /// Average rating, if the source exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl SearchResult {
    /// Returns the normalized key used for cross-source deduplication.
    ///
    /// The key is the name lower-cased with spaces and hyphens stripped, so
    /// `"Clannad"` and `"clan nad"` collapse to the same entry. The key is
    /// only used for dedup decisions; the original name is kept on the
    /// surviving result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use galsearch::types::{SearchResult, SearchSource};
    ///
    /// let result = SearchResult {
    ///     name: "ef - a fairy tale of the two.".to_string(),
    ///     link: "https://www.touchgal.us/123".to_string(),
    ///     source: SearchSource::TouchGal,
    ///     tags: vec![],
    ///     rating: None,
    /// };
    /// assert_eq!(result.dedup_key(), "efafairytaleofthetwo.");
    /// ```
    pub fn dedup_key(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect()
    }
}

impl fmt::Display for SearchResult {
    /// Renders a standalone message card for this result.
    ///
    /// The card carries the name, the link, the tags when present, and the
    /// rating when it is a positive score. A zero rating means the source
    /// reported no score and is omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🎮 {}\n📎 {}", self.name, self.link)?;
        if !self.tags.is_empty() {
            write!(f, "\n🏷️ {}", self.tags.join(" | "))?;
        }
        if let Some(rating) = self.rating {
            if rating > 0.0 {
                write!(f, "\n⭐ 评分: {}", rating)?;
            }
        }
        Ok(())
    }
}

/// Search parameters shared by all sources.
///
/// The `derive_builder` crate generates a `SearchParamsBuilder` for fluent
/// construction; most callers go through
/// [`Sources::search`](crate::source::Sources::search) instead.
///
/// ```rust
/// use galsearch::types::SearchParamsBuilder;
///
/// let params = SearchParamsBuilder::default()
///     .query("clannad".to_string())
///     .limit(Some(10usize))
///     .timeout(Some(15u64))
///     .build()
///     .unwrap();
/// assert_eq!(params.limit, Some(10));
/// ```
///
/// # Fields
///
/// * `query` - The game name to search for
/// * `limit` - Per-source result cap; `None` means [`DEFAULT_LIMIT`]
/// * `timeout` - Per-request timeout in seconds; `None` means [`DEFAULT_TIMEOUT_SECS`]
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct SearchParams {
    pub query: String,
    #[builder(default)]
    pub limit: Option<usize>,
    #[builder(default)]
    pub timeout: Option<u64>,
}

impl SearchParams {
    /// The effective per-source result cap.
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// The effective per-request timeout in seconds.
    pub fn effective_timeout(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl From<String> for SearchParams {
    fn from(query: String) -> Self {
        SearchParams {
            query,
            ..Default::default()
        }
    }
}

impl From<&str> for SearchParams {
    /// Creates search parameters from a query string with default limits.
    ///
    /// ```rust
    /// use galsearch::types::SearchParams;
    ///
    /// let params: SearchParams = "anemoi".into();
    /// assert_eq!(params.query, "anemoi");
    /// assert_eq!(params.limit, None);
    /// ```
    fn from(query: &str) -> Self {
        SearchParams {
            query: query.to_string(),
            ..Default::default()
        }
    }
}
