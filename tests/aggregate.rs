//! Aggregation pipeline tests
//!
//! Deterministic tests of the multi-source merge: concurrency-independent
//! ordering, cross-source deduplication, capping, and partial-failure
//! tolerance, all against mock sources.

use galsearch::prelude::*;

mod common;
use common::{FailingSource, StaticSource, init_tracing, result};

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[tokio::test]
    async fn test_sources_collection_basic() {
        let mut sources = Sources::new();
        sources.add(StaticSource {
            id: "alpha",
            results: vec![],
        });
        sources.add(StaticSource {
            id: "beta",
            results: vec![],
        });

        assert_eq!(sources.len(), 2);
        assert!(!sources.is_empty());
        assert_eq!(sources.list_ids(), vec!["alpha", "beta"]);
        assert!(sources.get("alpha").is_some());
        assert!(sources.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_surviving_branch() {
        init_tracing();
        let mut sources = Sources::new();
        sources.add(FailingSource { id: "down" });
        sources.add(StaticSource {
            id: "up",
            results: vec![
                result("CLANNAD", "https://example.com/1", SearchSource::ShionLib),
                result("Kanon", "https://example.com/2", SearchSource::ShionLib),
                result("Air", "https://example.com/3", SearchSource::ShionLib),
            ],
        });

        let merged = sources.search("key").merged().await;

        // The failing branch contributes nothing and costs nothing
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].name, "CLANNAD");
    }

    #[tokio::test]
    async fn test_all_sources_failing_yields_empty() {
        init_tracing();
        let mut sources = Sources::new();
        sources.add(FailingSource { id: "down-a" });
        sources.add(FailingSource { id: "down-b" });

        let merged = sources.search("key").merged().await;
        assert!(merged.is_empty());
        assert_eq!(format_results(&merged), NO_RESULTS_MESSAGE);
    }

    #[tokio::test]
    async fn test_grouped_exposes_individual_failures() {
        let mut sources = Sources::new();
        sources.add(StaticSource {
            id: "up",
            results: vec![result(
                "CLANNAD",
                "https://example.com/1",
                SearchSource::TouchGal,
            )],
        });
        sources.add(FailingSource { id: "down" });

        let grouped = sources.search("key").group().await;

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "up");
        assert_eq!(grouped[0].1.as_ref().unwrap().len(), 1);
        assert_eq!(grouped[1].0, "down");
        assert!(grouped[1].1.is_err());
    }

    #[tokio::test]
    async fn test_cross_source_dedup_prefers_first_registered() {
        // First-registered source plays the TouchGal role and must win the tie
        let mut sources = Sources::new();
        sources.add(StaticSource {
            id: "primary",
            results: vec![result(
                "Clannad",
                "https://www.touchgal.us/clannad",
                SearchSource::TouchGal,
            )],
        });
        sources.add(StaticSource {
            id: "secondary",
            results: vec![
                // Normalizes to the same key as "Clannad"
                result(
                    "clan nad",
                    "https://shionlib.com/zh/game/1",
                    SearchSource::ShionLib,
                ),
                result(
                    "Kanon",
                    "https://shionlib.com/zh/game/2",
                    SearchSource::ShionLib,
                ),
            ],
        });

        let merged = sources.search("clannad").merged().await;

        assert_eq!(merged.len(), 2);
        // Survivor keeps the first-seen casing and source
        assert_eq!(merged[0].name, "Clannad");
        assert_eq!(merged[0].source, SearchSource::TouchGal);
        assert_eq!(merged[1].name, "Kanon");
    }

    #[tokio::test]
    async fn test_merge_preserves_first_seen_order() {
        let mut sources = Sources::new();
        sources.add(StaticSource {
            id: "primary",
            results: vec![
                result("B Game", "https://example.com/b", SearchSource::TouchGal),
                result("A Game", "https://example.com/a", SearchSource::TouchGal),
            ],
        });
        sources.add(StaticSource {
            id: "secondary",
            results: vec![result(
                "C Game",
                "https://example.com/c",
                SearchSource::ShionLib,
            )],
        });

        let merged = sources.search("game").merged().await;
        let names: Vec<&str> = merged.iter().map(|r| r.name.as_str()).collect();

        // Concatenation order, no re-sorting
        assert_eq!(names, vec!["B Game", "A Game", "C Game"]);
    }

    #[tokio::test]
    async fn test_dedup_is_idempotent_on_unique_input() {
        let results = vec![
            result("CLANNAD", "https://example.com/1", SearchSource::TouchGal),
            result("Kanon", "https://example.com/2", SearchSource::TouchGal),
            result("Air", "https://example.com/3", SearchSource::ShionLib),
        ];

        let deduped = results.clone().dedupe_by_name();
        assert_eq!(deduped.len(), results.len());
        for (before, after) in results.iter().zip(deduped.iter()) {
            assert_eq!(before.name, after.name);
            assert_eq!(before.link, after.link);
        }
    }

    #[tokio::test]
    async fn test_merged_caps_at_double_the_limit() {
        let many: Vec<SearchResult> = (0..10)
            .map(|i| {
                result(
                    &format!("Game {}", i),
                    &format!("https://example.com/{}", i),
                    SearchSource::TouchGal,
                )
            })
            .collect();

        let mut sources = Sources::new();
        sources.add(StaticSource {
            id: "primary",
            results: many.clone(),
        });
        sources.add(StaticSource {
            id: "secondary",
            results: (10..20)
                .map(|i| {
                    result(
                        &format!("Game {}", i),
                        &format!("https://example.com/{}", i),
                        SearchSource::ShionLib,
                    )
                })
                .collect(),
        });

        // limit 3 => at most 6 merged entries, even though sources over-delivered
        let merged = sources.search("game").limit(3).merged().await;
        assert_eq!(merged.len(), 6);

        // Default limit 5 => at most 10
        let merged_default = sources.search("game").merged().await;
        assert!(merged_default.len() <= 10);
    }

    #[tokio::test]
    async fn test_from_source_unknown_id() {
        let sources = Sources::new();
        let err = sources.search("key").from_source("nope").await.unwrap_err();
        assert!(matches!(err, galsearch::Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_builder_build_returns_params() {
        let sources = Sources::new();
        let params = sources.search("ef").limit(7).timeout(3).build();

        assert_eq!(params.query, "ef");
        assert_eq!(params.limit, Some(7));
        assert_eq!(params.timeout, Some(3));
    }
}
