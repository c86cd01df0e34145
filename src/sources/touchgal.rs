use crate::{
    error::Result,
    net::HttpClient,
    source::Source,
    types::{SearchParams, SearchResult, SearchSource, UNKNOWN_TITLE},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://www.touchgal.us";

/// TouchGal search request body.
///
/// The wire format is fixed: `query_string` is itself a JSON-encoded list of
/// query terms, alias search is on, full-text search over introductions and
/// tags is off, and the sort pins most-recently-updated resources first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TouchGalRequest {
    query_string: String,
    limit: usize,
    search_option: TouchGalSearchOption,
    page: u32,
    selected_type: &'static str,
    selected_language: &'static str,
    selected_platform: &'static str,
    sort_field: &'static str,
    sort_order: &'static str,
    selected_years: Vec<&'static str>,
    selected_months: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TouchGalSearchOption {
    search_in_introduction: bool,
    search_in_alias: bool,
    search_in_tag: bool,
}

/// One term of the nested `queryString` payload.
#[derive(Debug, Serialize)]
struct TouchGalQueryTerm<'a> {
    #[serde(rename = "type")]
    term_type: &'static str,
    name: &'a str,
}

/// TouchGal search API response.
#[derive(Debug, Deserialize)]
struct TouchGalResponse {
    #[serde(default)]
    galgames: Vec<TouchGalRecord>,
}

/// A single game record; fields the API sometimes omits all default.
#[derive(Debug, Deserialize)]
struct TouchGalRecord {
    #[serde(rename = "uniqueId")]
    unique_id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(rename = "averageRating", default)]
    average_rating: f64,
}

/// TouchGal source implementation.
///
/// Queries the TouchGal JSON search API with a single POST per call. TouchGal
/// entries carry direct download resources, which is why this source is
/// registered ahead of ShionLib in the default collection.
///
/// # Examples
///
/// ```rust,no_run
/// use galsearch::sources::TouchGalSource;
/// use galsearch::prelude::*;
///
/// # async fn example() -> galsearch::Result<()> {
/// let source = TouchGalSource::new();
/// let results = source.search(SearchParams {
///     query: "clannad".to_string(),
///     limit: Some(5),
///     timeout: Some(10),
/// }).await?;
/// # Ok(())
/// # }
/// ```
pub struct TouchGalSource {
    client: HttpClient,
}

impl TouchGalSource {
    /// Create a new TouchGal source.
    pub fn new() -> Self {
        Self {
            client: HttpClient::new("touchgal").with_header("Referer", BASE_URL),
        }
    }

    fn build_request(&self, query: &str, limit: usize) -> Result<TouchGalRequest> {
        let terms = vec![TouchGalQueryTerm {
            term_type: "keyword",
            name: query,
        }];

        Ok(TouchGalRequest {
            query_string: serde_json::to_string(&terms)?,
            limit,
            search_option: TouchGalSearchOption {
                search_in_introduction: false,
                search_in_alias: true,
                search_in_tag: false,
            },
            page: 1,
            selected_type: "all",
            selected_language: "all",
            selected_platform: "all",
            sort_field: "resource_update_time",
            sort_order: "desc",
            selected_years: vec!["all"],
            selected_months: vec!["all"],
        })
    }

    fn map_record(&self, record: TouchGalRecord) -> Option<SearchResult> {
        // Records without an identifier have no detail page to link to.
        let unique_id = record.unique_id.filter(|id| !id.is_empty())?;

        Some(SearchResult {
            name: record
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            link: format!("{}/{}", BASE_URL, unique_id),
            source: SearchSource::TouchGal,
            tags: record.tags,
            // The API reports 0 for unrated games; the field is always present
            // for this source, so the rating is always Some here.
            rating: Some(record.average_rating),
        })
    }
}

impl Default for TouchGalSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for TouchGalSource {
    fn id(&self) -> &'static str {
        "touchgal"
    }

    fn name(&self) -> &'static str {
        "TouchGal"
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

        let request = self.build_request(&params.query, limit)?;
        let response: TouchGalResponse = client
            .post_json(&format!("{}/api/search", BASE_URL), &request)
            .await?;

        let mut results: Vec<SearchResult> = response
            .galgames
            .into_iter()
            .filter_map(|record| self.map_record(record))
            .collect();

        // The API honors the limit in the payload; truncate anyway so the
        // per-source cap holds even if it doesn't.
        results.truncate(limit);

        debug!(count = results.len(), query = %params.query, "touchgal search complete");
        Ok(results)
    }
}
