//! Rendering of search results into chat-ready text.
//!
//! A pure formatting layer: no I/O, never fails. The caller decides how the
//! rendered text travels to the user.
//!
//! # Examples
//!
//! ```rust
//! use galsearch::format::{format_results, NO_RESULTS_MESSAGE};
//!
//! assert_eq!(format_results(&[]), NO_RESULTS_MESSAGE);
//! ```

use crate::types::SearchResult;

/// Fixed message rendered when a search produced no results.
pub const NO_RESULTS_MESSAGE: &str = "😔 没有找到相关的 Galgame，请尝试其他关键词";

/// Renders a result list into a multi-line chat message.
///
/// Empty input produces [`NO_RESULTS_MESSAGE`]. Otherwise the message is a
/// count header, one block per result in input order (index, name, source
/// icon, link line, and a tags line only when tags are present), and a
/// trailing legend explaining the icons.
///
/// # Examples
///
/// ```rust
/// use galsearch::format::format_results;
/// use galsearch::types::{SearchResult, SearchSource};
///
/// let results = vec![SearchResult {
///     name: "ef - a fairy tale of the two.".to_string(),
///     link: "https://www.touchgal.us/123".to_string(),
///     source: SearchSource::TouchGal,
///     tags: vec!["恋爱".to_string()],
///     rating: Some(8.5),
/// }];
///
/// let message = format_results(&results);
/// assert!(message.starts_with("🔍 找到 1 个相关 Galgame："));
/// assert!(message.contains("【1】ef - a fairy tale of the two. 📦"));
/// ```
pub fn format_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut lines = vec![format!("🔍 找到 {} 个相关 Galgame：", results.len()), String::new()];

    for (i, result) in results.iter().enumerate() {
        lines.push(format!("【{}】{} {}", i + 1, result.name, result.source.icon()));
        lines.push(format!("    📎 {}", result.link));
        if !result.tags.is_empty() {
            lines.push(format!("    🏷️ {}", result.tags.join(" | ")));
        }
        lines.push(String::new());
    }

    lines.push("📦 = TouchGal | 📚 = ShionLib".to_string());
    lines.push("💡 点击链接即可访问下载页面".to_string());

    lines.join("\n")
}
