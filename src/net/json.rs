//! JSON extraction utilities for embedded page-state blobs and API responses.
//!
//! Server-rendered search pages inline a JSON blob carrying the data used to
//! hydrate the page client-side. These helpers navigate such blobs with dot
//! notation instead of hand-rolled nesting, and decode loosely-typed fields
//! defensively.
//!
//! # Examples
//!
//! ```rust
//! use galsearch::net::json;
//! use serde_json::json;
//!
//! let state = json!({
//!     "props": {
//!         "pageProps": {
//!             "games": [
//!                 {"id": 1, "name": "CLANNAD"},
//!                 {"id": 2, "name": "ef"}
//!             ]
//!         }
//!     }
//! });
//!
//! let games = json::extract_array(&state, "props.pageProps.games");
//! assert_eq!(games.len(), 2);
//! ```

use serde_json::Value;

/// Extracts a value from nested JSON using dot notation.
///
/// Navigates through nested JSON objects using a dot-separated path,
/// returning `None` as soon as any segment is missing.
///
/// # Examples
///
/// ```rust
/// use galsearch::net::json;
/// use serde_json::json;
///
/// let data = json!({"props": {"pageProps": {"total": 3}}});
///
/// let total = json::extract_path(&data, "props.pageProps.total");
/// assert_eq!(total.unwrap().as_u64(), Some(3));
///
/// let missing = json::extract_path(&data, "props.missing");
/// assert_eq!(missing, None);
/// ```
pub fn extract_path(json: &Value, path: &str) -> Option<Value> {
    let mut current = json;

    for key in path.split('.') {
        current = current.get(key)?;
    }

    Some(current.clone())
}

/// Extracts an array from a nested JSON path.
///
/// Returns the array's elements, or an empty vector when the path doesn't
/// exist or doesn't point at an array. Absent lists and empty lists are the
/// same thing to callers.
pub fn extract_array(json: &Value, path: &str) -> Vec<Value> {
    extract_path(json, path)
        .and_then(|v| v.as_array().cloned())
        .unwrap_or_default()
}

/// Decodes an identifier field that may be a JSON number or string.
///
/// Page-state blobs are not consistent about identifier types; this accepts
/// either form and rejects anything else (objects, null, empty strings).
///
/// # Examples
///
/// ```rust
/// use galsearch::net::json;
/// use serde_json::json;
///
/// assert_eq!(json::id_string(&json!(42)), Some("42".to_string()));
/// assert_eq!(json::id_string(&json!("42")), Some("42".to_string()));
/// assert_eq!(json::id_string(&json!(null)), None);
/// assert_eq!(json::id_string(&json!("")), None);
/// ```
pub fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
