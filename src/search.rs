//! Search functionality and fluent search builder.
//!
//! This module provides a fluent search API for building search parameters
//! and executing searches across the registered sources with different
//! strategies, plus post-processing helpers for result lists.
//!
//! # Examples
//!
//! ```rust,no_run
//! use galsearch::prelude::*;
//!
//! # async fn example() {
//! let sources = Sources::with_defaults();
//!
//! // Merged search with per-source limit and timeout
//! let results = sources
//!     .search("clannad")
//!     .limit(5)
//!     .timeout(10)
//!     .merged()
//!     .await;
//!
//! // Grouped search for debugging individual sources
//! let grouped = sources.search("clannad").group().await;
//! # }
//! ```

use std::collections::HashSet;

use crate::{
    error::Result,
    source::Sources,
    types::{SearchParams, SearchResult},
};

/// A fluent search builder that accumulates parameters and executes searches.
///
/// `SearchBuilder` holds a reference to a [`Sources`] collection and builds
/// [`SearchParams`] as you chain method calls.
///
/// # Execution Strategies
///
/// - [`merged()`](SearchBuilder::merged) - One deduplicated list across all sources; never fails
/// - [`group()`](SearchBuilder::group) - Results grouped per source, failures visible
/// - [`from_source()`](SearchBuilder::from_source) - Query one specific source
/// - [`build()`](SearchBuilder::build) - Just the parameters, no execution
pub struct SearchBuilder<'a> {
    sources: &'a Sources,
    params: SearchParams,
}

impl<'a> SearchBuilder<'a> {
    /// Creates a new search builder with the given query.
    ///
    /// Called internally by [`Sources::search()`](crate::source::Sources::search).
    pub(crate) fn new(sources: &'a Sources, query: impl Into<String>) -> Self {
        Self {
            sources,
            params: SearchParams {
                query: query.into(),
                ..Default::default()
            },
        }
    }

    /// Sets the per-source result cap.
    ///
    /// The merged strategy may return up to twice this many entries, since
    /// every source caps itself independently before the merge.
    pub fn limit(mut self, limit: usize) -> Self {
        self.params.limit = Some(limit);
        self
    }

    /// Sets the per-request timeout in seconds.
    ///
    /// Each source enforces the timeout on its own request, so a stalled
    /// site bounds only its own branch.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.params.timeout = Some(seconds);
        self
    }

    /// Executes the search and returns one merged, deduplicated list.
    ///
    /// Individual source failures degrade to empty contributions and are
    /// logged; this strategy never returns an error. See
    /// [`Sources::search_all_merged`](crate::source::Sources::search_all_merged)
    /// for the merge pipeline.
    pub async fn merged(self) -> Vec<SearchResult> {
        self.sources.search_all_merged(self.params).await
    }

    /// Executes the search and returns results grouped by source.
    ///
    /// Useful for debugging: each source's results or error are returned
    /// separately, in registration order.
    pub async fn group(self) -> Vec<(String, Result<Vec<SearchResult>>)> {
        self.sources.search_all_grouped(self.params).await
    }

    /// Executes the search on a specific source only.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFound`](crate::Error::NotFound) if no source with that ID exists
    /// * The source's own error if the search fails
    pub async fn from_source(self, source_id: &str) -> Result<Vec<SearchResult>> {
        match self.sources.get(source_id) {
            Some(source) => source.search(self.params).await,
            None => Err(crate::Error::not_found(format!("Source: {}", source_id))),
        }
    }

    /// Builds and returns the search parameters without executing.
    pub fn build(self) -> SearchParams {
        self.params
    }
}

/// Extension trait providing post-processing methods for result lists.
///
/// # Examples
///
/// ```rust
/// use galsearch::prelude::*;
/// use galsearch::types::SearchSource;
///
/// let results = vec![
///     SearchResult {
///         name: "Clannad".to_string(),
///         link: "https://www.touchgal.us/clannad".to_string(),
///         source: SearchSource::TouchGal,
///         tags: vec![],
///         rating: Some(9.0),
///     },
///     SearchResult {
///         name: "clan nad".to_string(),
///         link: "https://shionlib.com/zh/game/1".to_string(),
///         source: SearchSource::ShionLib,
///         tags: vec![],
///         rating: None,
///     },
/// ];
///
/// let unique = results.dedupe_by_name();
/// assert_eq!(unique.len(), 1);
/// assert_eq!(unique[0].name, "Clannad");
/// ```
pub trait SearchResultExt {
    /// Removes duplicate entries by normalized name.
    ///
    /// Two results are duplicates when their names normalize to the same key
    /// (lower-cased, spaces and hyphens stripped; see
    /// [`SearchResult::dedup_key`]). The first occurrence survives with its
    /// original casing; later duplicates are dropped regardless of source.
    fn dedupe_by_name(self) -> Self;

    /// Removes duplicate entries by link.
    ///
    /// Intended for callers that run the merged search once per keyword
    /// variant and pool the outputs: the same detail page found under two
    /// keywords collapses to one entry.
    fn dedupe_by_link(self) -> Self;
}

impl SearchResultExt for Vec<SearchResult> {
    fn dedupe_by_name(mut self) -> Self {
        let mut seen = HashSet::new();
        self.retain(|result| seen.insert(result.dedup_key()));
        self
    }

    fn dedupe_by_link(mut self) -> Self {
        let mut seen = HashSet::new();
        self.retain(|result| seen.insert(result.link.clone()));
        self
    }
}
