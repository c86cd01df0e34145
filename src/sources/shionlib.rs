use crate::{
    error::Result,
    net::{HttpClient, html, json},
    source::Source,
    types::{SearchParams, SearchResult, SearchSource, UNKNOWN_TITLE},
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://shionlib.com";

/// Anchor-plus-heading pattern for the markup fallback. Coupled to the exact
/// structure of the search page, so strictly best-effort.
static FALLBACK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<a[^>]*href="/zh/game/(\d+)"[^>]*>.*?<h3[^>]*>([^<]+)</h3>"#)
        .expect("valid fallback pattern")
});

/// ShionLib source implementation.
///
/// ShionLib has no public search API; this source scrapes the server-rendered
/// search page. Extraction is two-tier:
///
/// 1. **Structured**: the page inlines its hydration state as JSON in a
///    `<script id="__NEXT_DATA__">` tag; the games list lives at
///    `props.pageProps.games`.
/// 2. **Fallback**: when tier 1 yields nothing at all (missing script,
///    unparsable JSON, or an empty games list), a regex scan over the raw
///    markup picks up game-detail anchors and their heading text.
///
/// The scraped surface exposes neither tags nor ratings, so results from
/// this source always have empty tags and no rating.
///
/// # Examples
///
/// ```rust,no_run
/// use galsearch::sources::ShionLibSource;
/// use galsearch::prelude::*;
///
/// # async fn example() -> galsearch::Result<()> {
/// let source = ShionLibSource::new();
/// let results = source.search("ef".into()).await?;
/// # Ok(())
/// # }
/// ```
pub struct ShionLibSource {
    client: HttpClient,
}

impl ShionLibSource {
    /// Create a new ShionLib source.
    pub fn new() -> Self {
        Self {
            client: HttpClient::new("shionlib").with_header("Referer", BASE_URL),
        }
    }

    /// Extracts results from a search page, structured tier first.
    ///
    /// Public so the parsing stage can be exercised without the network; the
    /// fetch itself happens in [`Source::search`].
    pub fn parse_search_page(&self, page: &str, limit: usize) -> Vec<SearchResult> {
        let results = self.extract_structured(page, limit);
        if !results.is_empty() {
            return results;
        }

        self.extract_fallback(page, limit)
    }

    /// Tier 1: embedded page-state JSON.
    ///
    /// Any shape mismatch yields an empty list, which hands control to the
    /// fallback tier rather than failing the whole fetch.
    fn extract_structured(&self, page: &str, limit: usize) -> Vec<SearchResult> {
        let document = html::parse(page);
        let Some(state_text) = html::select_text(&document, r#"script#__NEXT_DATA__"#) else {
            return Vec::new();
        };

        let Ok(state) = serde_json::from_str::<Value>(&state_text) else {
            debug!("shionlib page state is not valid JSON, trying markup fallback");
            return Vec::new();
        };

        json::extract_array(&state, "props.pageProps.games")
            .into_iter()
            .take(limit)
            .filter_map(|game| self.map_game(&game))
            .collect()
    }

    /// Tier 2: regex scan over the raw markup.
    fn extract_fallback(&self, page: &str, limit: usize) -> Vec<SearchResult> {
        FALLBACK_PATTERN
            .captures_iter(page)
            .take(limit)
            .filter_map(|captures| {
                let game_id = captures.get(1)?.as_str();
                let title = captures.get(2)?.as_str().trim();
                if title.is_empty() {
                    return None;
                }

                Some(SearchResult {
                    name: title.to_string(),
                    link: format!("{}/zh/game/{}", BASE_URL, game_id),
                    source: SearchSource::ShionLib,
                    tags: Vec::new(),
                    rating: None,
                })
            })
            .collect()
    }

    fn map_game(&self, game: &Value) -> Option<SearchResult> {
        // No identifier, no detail page; skip the record.
        let game_id = game.get("id").and_then(json::id_string)?;

        // Localized name first, then the primary name.
        let name = game
            .get("name_cn")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                game.get("name")
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
            })
            .unwrap_or(UNKNOWN_TITLE);

        Some(SearchResult {
            name: name.to_string(),
            link: format!("{}/zh/game/{}", BASE_URL, game_id),
            source: SearchSource::ShionLib,
            tags: Vec::new(),
            rating: None,
        })
    }
}

impl Default for ShionLibSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for ShionLibSource {
    fn id(&self) -> &'static str {
        "shionlib"
    }

    fn name(&self) -> &'static str {
        "ShionLib"
    }

    fn base_url(&self) -> &str {
        BASE_URL
    }

    async fn search(&self, params: SearchParams) -> Result<Vec<SearchResult>> {
        let limit = params.effective_limit();
        let client = self
            .client
            .clone()
            .with_timeout(Duration::from_secs(params.effective_timeout()));

        let url = format!(
            "{}/zh/search/game?q={}",
            BASE_URL,
            urlencoding::encode(&params.query)
        );
        let page = client.get_text(&url).await?;

        let results = self.parse_search_page(&page, limit);
        debug!(count = results.len(), query = %params.query, "shionlib search complete");
        Ok(results)
    }
}
