//! # galsearch - Multi-source Galgame resource search library
//!
//! galsearch is an async aggregation library that searches for visual-novel
//! ("Galgame") resources across multiple content sites through a single
//! interface. It fans a query out to every registered source concurrently,
//! tolerates partial failure, merges and deduplicates the answers, and can
//! render them as a chat-ready message.
//!
//! ## Features
//!
//! - **Unified Search API**: One query across heterogeneous sources (JSON
//!   APIs and scraped HTML pages alike)
//! - **Concurrent Fan-out**: Branches run in parallel, so total latency is
//!   bounded by the slowest source, not the sum
//! - **Fails Soft**: A source that times out or returns garbage contributes
//!   nothing instead of failing the search; failures are logged via `tracing`
//! - **Cross-source Deduplication**: Name-normalized, first occurrence wins,
//!   with source priority by registration order
//! - **Chat Formatting**: Built-in rendering of result lists into
//!   human-readable multi-line messages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use galsearch::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sources = Sources::with_defaults();
//!
//!     // Merged search: never fails, worst case is an empty list
//!     let results = sources
//!         .search("clannad")
//!         .limit(5)
//!         .timeout(10)
//!         .merged()
//!         .await;
//!
//!     println!("{}", format_results(&results));
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`source`]: Core trait and collection for search sources, including the
//!   merge/dedup aggregation pipeline
//! - [`search`]: Fluent search builder and result post-processing
//! - [`sources`]: The site-specific fetchers (TouchGal, ShionLib)
//! - [`types`]: Result entities and search parameters
//! - [`format`]: Chat message rendering
//! - [`net`]: HTTP client and parsing utilities
//! - [`error`]: Error handling
//!
//! ## Search Strategies
//!
//! ```rust,no_run
//! # use galsearch::prelude::*;
//! # async fn example() -> galsearch::Result<()> {
//! # let sources = Sources::with_defaults();
//! // One merged, deduplicated list (infallible)
//! let merged = sources.search("ef").merged().await;
//!
//! // Results grouped by source, failures visible (useful for debugging)
//! let grouped = sources.search("ef").group().await;
//!
//! // Query a specific source only
//! let touchgal_only = sources.search("ef").from_source("touchgal").await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format;
pub mod net;
pub mod search;
pub mod source;
pub mod sources;
pub mod types;

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and traits:
///
/// ```rust
/// use galsearch::prelude::*;
///
/// // Now you have access to:
/// // - Sources, Source trait
/// // - SearchBuilder, SearchResultExt
/// // - SearchResult, SearchSource, SearchParams
/// // - format_results, NO_RESULTS_MESSAGE
/// ```
pub mod prelude {
    pub use crate::{
        format::{NO_RESULTS_MESSAGE, format_results},
        search::{SearchBuilder, SearchResultExt},
        source::{Source, Sources},
        types::{SearchParams, SearchResult, SearchSource},
    };
}

// Re-export main types at crate root for direct access
pub use error::{Error, Result};
pub use format::{NO_RESULTS_MESSAGE, format_results};
pub use search::{SearchBuilder, SearchResultExt};
pub use source::{Source, Sources};
pub use types::{SearchParams, SearchResult, SearchSource};
