//! Error types and result handling for galsearch operations.
//!
//! All operations return a [`Result<T>`] which is a type alias for
//! `std::result::Result<T, Error>`.
//!
//! Individual source fetchers surface their failures through these types;
//! the aggregator in [`Sources`](crate::source::Sources) then degrades any
//! per-source error into an empty result set, so callers of the merged
//! search never see an error for network or parsing trouble, only fewer
//! results.
//!
//! # Error Categories
//!
//! - **Network Errors**: Connection issues, timeouts, HTTP transport errors
//! - **Parse Errors**: Invalid HTML, JSON, or missing expected structure
//! - **Source Errors**: Site-specific errors with context (e.g. non-200 status)
//! - **Not Found**: Unknown source IDs
//! - **JSON Errors**: Serialization/deserialization failures
//!
//! # Examples
//!
//! ```rust
//! use galsearch::prelude::*;
//! use galsearch::error::{Result, Error};
//!
//! # async fn example() -> Result<()> {
//! let sources = Sources::new();
//!
//! match sources.search("clannad").from_source("invalid").await {
//!     Ok(results) => println!("Found {} results", results.len()),
//!     Err(Error::NotFound(msg)) => println!("Source not found: {}", msg),
//!     Err(Error::Network(e)) => println!("Network error: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Type alias for Results with galsearch errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all galsearch operations.
///
/// Covers every failure mode a source fetch can hit, from connection
/// timeouts to a search page whose embedded state JSON changed shape.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// Wraps errors from the underlying HTTP client (reqwest), including
    /// per-request timeouts, DNS resolution failures, and TLS errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTML/JSON parsing and data format errors.
    ///
    /// Used when the received data cannot be parsed as expected, such as an
    /// unexpected JSON structure or a missing field path in embedded page
    /// state.
    ///
    /// ```rust
    /// use galsearch::Error;
    ///
    /// let error = Error::parse("Missing games list in page state");
    /// ```
    #[error("Parse error: {0}")]
    Parse(String),

    /// Source-specific errors with contextual information.
    ///
    /// Carries the source identifier together with a descriptive message,
    /// typically a non-success HTTP status.
    ///
    /// ```rust
    /// use galsearch::Error;
    ///
    /// let error = Error::source("touchgal", "HTTP 503");
    /// ```
    #[error("Source error [{src}]: {message}")]
    Source { src: String, message: String },

    /// Resource not found errors, e.g. an unknown source ID.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization and deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error messages that fit no other category.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a parse error with the given message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates a source-specific error with source ID and message.
    pub fn source(src: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::Source {
            src: src.into(),
            message: msg.into(),
        }
    }

    /// Creates a not found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }
}
