//! Network utilities for HTTP requests and content parsing.
//!
//! This module provides the networking infrastructure for galsearch:
//!
//! - **HTTP Client**: A per-source client wrapper with browser-style headers
//! - **Content Parsing**: HTML and JSON parsing utilities
//!
//! Requests are strictly one-shot: there is no retry, backoff, or rate
//! limiting. Each request builds its own scoped `reqwest::Client` carrying
//! the request timeout, so dropping the future releases the underlying
//! connection.
//!
//! # Examples
//!
//! ```rust
//! use galsearch::net::HttpClient;
//! use std::time::Duration;
//!
//! # async fn example() -> galsearch::Result<()> {
//! let client = HttpClient::new("shionlib")
//!     .with_header("Referer", "https://shionlib.com")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let html = client.get_text("https://shionlib.com/zh/search/game?q=ef").await?;
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::{Client, header::HeaderMap};
use std::time::Duration;

pub mod html;
pub mod json;

/// Browser-style user agent sent with every request.
///
/// Both sites may reject requests that don't look like they came from a
/// browser, so the default header set mimics desktop Chrome.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default headers shared by all sources. Referer is added per source.
static DEFAULT_HEADERS: Lazy<HeaderMap> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert("User-Agent", USER_AGENT.parse().expect("static header"));
    headers.insert(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
            .parse()
            .expect("static header"),
    );
    headers.insert(
        "Accept-Language",
        "zh-CN,zh;q=0.9,en;q=0.8".parse().expect("static header"),
    );
    headers
});

/// HTTP client wrapper used by source implementations.
///
/// Each `HttpClient` is associated with one source and carries that source's
/// header set and timeout. The wrapper is cheap to clone, which is how
/// sources apply a per-call timeout override:
///
/// ```rust
/// use galsearch::net::HttpClient;
/// use std::time::Duration;
///
/// let base = HttpClient::new("touchgal").with_header("Referer", "https://www.touchgal.us");
/// let scoped = base.clone().with_timeout(Duration::from_secs(5));
/// ```
///
/// # Failure model
///
/// Requests are single attempts. A timeout, connection error, or non-success
/// status returns an [`Error`](crate::Error) immediately; retry policy is
/// deliberately absent.
#[derive(Clone, Debug)]
pub struct HttpClient {
    source_id: String,
    timeout: Duration,
    headers: HeaderMap,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified source.
    ///
    /// The client starts with the shared browser-style header set and the
    /// default 10-second timeout.
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            timeout: Duration::from_secs(crate::types::DEFAULT_TIMEOUT_SECS),
            headers: DEFAULT_HEADERS.clone(),
        }
    }

    /// Sets the per-request timeout for this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a custom header to all requests made by this client.
    ///
    /// Invalid header names or values are silently ignored.
    ///
    /// ```rust
    /// use galsearch::net::HttpClient;
    ///
    /// let client = HttpClient::new("source")
    ///     .with_header("Referer", "https://example.com");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<reqwest::header::HeaderName>(),
            value.parse::<reqwest::header::HeaderValue>(),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Builds the scoped client for a single request.
    ///
    /// One session per call: the connection pool lives only as long as the
    /// request future, so an abandoned search cannot leak connections.
    fn session(&self) -> crate::Result<Client> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .gzip(true)
            .brotli(true)
            .build()?)
    }

    /// Performs a one-shot GET request.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`](crate::Error::Network) - Transport errors and timeouts
    /// * [`Error::Source`](crate::Error::Source) - Non-success HTTP status
    pub async fn get(&self, url: &str) -> crate::Result<Bytes> {
        let response = self
            .session()?
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(crate::Error::source(
                &self.source_id,
                format!("HTTP {}", response.status()),
            ));
        }

        Ok(response.bytes().await?)
    }

    /// Performs a GET request and returns the response as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// * All errors from [`get()`](HttpClient::get)
    /// * [`Error::Parse`](crate::Error::Parse) - If the response is not valid UTF-8
    pub async fn get_text(&self, url: &str) -> crate::Result<String> {
        let bytes = self.get(url).await?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| crate::Error::parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Performs a one-shot POST request with a JSON body and deserializes the
    /// JSON response.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`](crate::Error::Network) - Transport errors and timeouts
    /// * [`Error::Source`](crate::Error::Source) - Non-success HTTP status
    /// * [`Error::Json`](crate::Error::Json) - If response parsing fails
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> crate::Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .session()?
            .post(url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(crate::Error::source(
                &self.source_id,
                format!("HTTP {}", response.status()),
            ));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}
