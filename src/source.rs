//! Source trait and collection for managing Galgame search sources.
//!
//! This module defines the core [`Source`] trait that all search sources
//! implement, and the [`Sources`] collection for fanning a query out across
//! every registered source, merging the answers, and tolerating per-source
//! failure.
//!
//! # Examples
//!
//! ```rust,no_run
//! use galsearch::prelude::*;
//!
//! # async fn example() {
//! let sources = Sources::with_defaults();
//!
//! // Search across all sources, merged and deduplicated
//! let results = sources.search("clannad").limit(5).merged().await;
//! for result in &results {
//!     println!("{} [{}]", result.name, result.source);
//! }
//! # }
//! ```

use async_trait::async_trait;
use futures::future;
use std::collections::HashMap;
use tracing::warn;

use crate::{
    error::Result,
    search::{SearchBuilder, SearchResultExt},
    types::{SearchParams, SearchResult},
};

/// Trait that all Galgame search sources must implement.
///
/// Each implementation owns the specifics of its site: the endpoint, the
/// payload or query-string shape, and the mapping from site records to
/// [`SearchResult`].
///
/// # Implementation Guidelines
///
/// - Use [`net::HttpClient`](crate::net::HttpClient) for HTTP requests and
///   apply the timeout from [`SearchParams`] per call
/// - Skip individual records that lack an identifier rather than failing the
///   whole batch
/// - Cap output at the params' effective limit
/// - Return detailed errors using the [`Error`](crate::Error) types; the
///   aggregator decides what to swallow
///
/// # Examples
///
/// ```rust
/// use galsearch::prelude::*;
/// use galsearch::error::Result;
/// use async_trait::async_trait;
///
/// struct MySource;
///
/// #[async_trait]
/// impl Source for MySource {
///     fn id(&self) -> &'static str { "my-source" }
///     fn name(&self) -> &'static str { "My Source" }
///     fn base_url(&self) -> &str { "https://example.com" }
///
///     async fn search(&self, params: SearchParams) -> Result<Vec<SearchResult>> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait Source: Send + Sync {
    /// Returns the unique identifier for this source.
    ///
    /// A lowercase, hyphen-separated string used for source selection and
    /// log context.
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of this source.
    fn name(&self) -> &'static str;

    /// Returns the base URL of this source, without a trailing slash.
    fn base_url(&self) -> &str;

    /// Searches this source for games matching the query.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`](crate::Error::Network) - Transport failure or timeout
    /// * [`Error::Source`](crate::Error::Source) - Non-success HTTP status
    /// * [`Error::Parse`](crate::Error::Parse) / [`Error::Json`](crate::Error::Json) -
    ///   Malformed response payload
    async fn search(&self, params: SearchParams) -> Result<Vec<SearchResult>>;
}

/// A collection of search sources with aggregation across all of them.
///
/// `Sources` manages multiple [`Source`] implementations. Registration order
/// is priority order: when the same game appears on several sites, the copy
/// from the earliest-registered source survives deduplication.
///
/// # Examples
///
/// ```rust
/// use galsearch::prelude::*;
///
/// # async fn example() {
/// let sources = Sources::with_defaults();
/// println!("Available sources: {:?}", sources.list_ids());
///
/// let results = sources.search("ef").limit(5).timeout(10).merged().await;
/// # }
/// ```
pub struct Sources {
    sources: Vec<Box<dyn Source>>,
    by_id: HashMap<String, usize>,
}

impl Sources {
    /// Creates a new empty source collection.
    ///
    /// ```rust
    /// use galsearch::prelude::*;
    ///
    /// let sources = Sources::new();
    /// assert!(sources.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Creates a collection with all compiled-in sources registered.
    ///
    /// TouchGal is registered before ShionLib: its entries carry direct
    /// download resources, so it wins cross-source deduplication ties.
    pub fn with_defaults() -> Self {
        #[allow(unused_mut)]
        let mut sources = Self::new();

        #[cfg(feature = "source-touchgal")]
        sources.add(crate::sources::TouchGalSource::new());

        #[cfg(feature = "source-shionlib")]
        sources.add(crate::sources::ShionLibSource::new());

        sources
    }

    /// Starts a fluent search across all sources.
    ///
    /// Returns a [`SearchBuilder`] for chaining parameters and picking an
    /// execution strategy.
    ///
    /// ```rust,no_run
    /// use galsearch::prelude::*;
    ///
    /// # async fn example() {
    /// let sources = Sources::with_defaults();
    /// let results = sources.search("anemoi").limit(10).merged().await;
    /// # }
    /// ```
    pub fn search(&self, query: impl Into<String>) -> SearchBuilder<'_> {
        SearchBuilder::new(self, query)
    }

    /// Adds a source to the collection.
    ///
    /// Returns a mutable reference to self for chaining.
    pub fn add(&mut self, source: impl Source + 'static) -> &mut Self {
        let id = source.id().to_string();
        let index = self.sources.len();
        self.sources.push(Box::new(source));
        self.by_id.insert(id, index);
        self
    }

    /// Retrieves a source by its ID.
    pub fn get(&self, id: &str) -> Option<&dyn Source> {
        self.by_id
            .get(id)
            .and_then(|&index| self.sources.get(index))
            .map(|s| s.as_ref())
    }

    /// Returns the IDs of all registered sources in registration order.
    pub fn list_ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    /// Searches all sources concurrently and returns results grouped by source.
    ///
    /// Every source receives the same parameters and applies its own timeout;
    /// the branches run in parallel, so total latency is bounded by the
    /// slowest branch rather than the sum. Results come back in registration
    /// order, each carrying that source's success or failure individually.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use galsearch::prelude::*;
    ///
    /// # async fn example() {
    /// let sources = Sources::with_defaults();
    /// let grouped = sources.search_all_grouped("ef".into()).await;
    /// for (source_id, result) in grouped {
    ///     match result {
    ///         Ok(games) => println!("{}: {} results", source_id, games.len()),
    ///         Err(e) => println!("{}: error - {}", source_id, e),
    ///     }
    /// }
    /// # }
    /// ```
    pub async fn search_all_grouped(
        &self,
        params: SearchParams,
    ) -> Vec<(String, Result<Vec<SearchResult>>)> {
        let futures = self.sources.iter().map(|source| {
            let params = params.clone();
            async move {
                let source_id = source.id().to_string();
                let result = source.search(params).await;
                (source_id, result)
            }
        });

        future::join_all(futures).await
    }

    /// Searches all sources concurrently and returns one merged result list.
    ///
    /// This is the aggregation pipeline:
    ///
    /// 1. Fan out to every source with the same parameters.
    /// 2. A failing branch degrades to an empty list; the failure is logged,
    ///    never propagated, and does not affect the other branches.
    /// 3. Concatenate surviving results in registration order.
    /// 4. Deduplicate by normalized name, first occurrence wins.
    /// 5. Truncate to twice the per-source limit. Each source already capped
    ///    itself at the limit, so the doubled bound hands multi-keyword
    ///    callers a fuller pool before their own final truncation.
    ///
    /// Total failure of every source yields an empty vector, not an error.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use galsearch::prelude::*;
    ///
    /// # async fn example() {
    /// let sources = Sources::with_defaults();
    /// let merged = sources.search_all_merged("clannad".into()).await;
    /// assert!(merged.len() <= 2 * 5); // default limit is 5 per source
    /// # }
    /// ```
    pub async fn search_all_merged(&self, params: SearchParams) -> Vec<SearchResult> {
        let limit = params.effective_limit();
        let grouped = self.search_all_grouped(params).await;

        let mut merged = Vec::new();
        for (source_id, result) in grouped {
            match result {
                Ok(mut results) => merged.append(&mut results),
                Err(e) => {
                    warn!(source = %source_id, error = %e, "source search failed, continuing with partial results");
                }
            }
        }

        let mut merged = merged.dedupe_by_name();
        merged.truncate(limit * 2);
        merged
    }

    /// Returns the number of sources in the collection.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if the collection contains no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for Sources {
    fn default() -> Self {
        Self::new()
    }
}
