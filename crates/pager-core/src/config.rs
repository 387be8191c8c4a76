//! Paging configuration handed over by the hosting page.

use serde::{Deserialize, Deserializer};
use smol_str::SmolStr;

use crate::url::query_param;

/// Per-render pagination configuration.
///
/// Deserializes from the `paging_config` object the server templates into
/// the page:
///
/// ```json
/// { "uri": "/items", "storage_key": "items-list", "cursor": true,
///   "next_cursor": "abc", "limit": 20, "results": 20 }
/// ```
///
/// Immutable for the lifetime of a navigator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagingConfig {
    /// Base request URL for this listing.
    pub uri: String,

    /// Key of this listing's persisted cursor history.
    pub storage_key: String,

    /// Whether the listing uses cursor-based pagination.
    #[serde(rename = "cursor", default)]
    pub cursor_mode: bool,

    /// Cursor for the page after this one. Empty strings mean "no more".
    #[serde(default, deserialize_with = "empty_as_none")]
    pub next_cursor: Option<SmolStr>,

    /// Cursor this page was requested with, absent on page 1.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub current_cursor: Option<SmolStr>,

    /// Page size, forwarded as `limit` on every link.
    pub limit: u32,

    /// Number of results rendered on this page.
    #[serde(rename = "results", default)]
    pub result_count: u32,
}

impl PagingConfig {
    /// Create a config for a listing. Cursor mode is on, no cursors, no results.
    pub fn new(uri: impl Into<String>, storage_key: impl Into<String>, limit: u32) -> Self {
        Self {
            uri: uri.into(),
            storage_key: storage_key.into(),
            cursor_mode: true,
            next_cursor: None,
            current_cursor: None,
            limit,
            result_count: 0,
        }
    }

    pub fn with_next_cursor(mut self, cursor: impl Into<SmolStr>) -> Self {
        let cursor: SmolStr = cursor.into();
        self.next_cursor = Some(cursor).filter(|c| !c.is_empty());
        self
    }

    pub fn with_current_cursor(mut self, cursor: impl Into<SmolStr>) -> Self {
        let cursor: SmolStr = cursor.into();
        self.current_cursor = Some(cursor).filter(|c| !c.is_empty());
        self
    }

    pub fn with_results(mut self, result_count: u32) -> Self {
        self.result_count = result_count;
        self
    }

    pub fn with_cursor_mode(mut self, enabled: bool) -> Self {
        self.cursor_mode = enabled;
        self
    }

    /// Fill `current_cursor` from the `cursor` parameter of `query` when the
    /// server did not send it. `query` is a link or a `location.search` string.
    pub fn with_request_query(mut self, query: &str) -> Self {
        if self.current_cursor.is_none() {
            self.current_cursor = query_param(query, "cursor").map(SmolStr::from);
        }
        self
    }

    /// True when this page was reached with a cursor, i.e. it is not page 1.
    pub fn expects_history(&self) -> bool {
        self.current_cursor.is_some()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<SmolStr>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<SmolStr>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_page_config() {
        let config: PagingConfig = serde_json::from_str(
            r#"{"uri":"/items","storage_key":"items","cursor":true,
                "next_cursor":"abc","limit":20,"results":15}"#,
        )
        .unwrap();

        assert_eq!(config.uri, "/items");
        assert_eq!(config.storage_key, "items");
        assert!(config.cursor_mode);
        assert_eq!(config.next_cursor.as_deref(), Some("abc"));
        assert_eq!(config.current_cursor, None);
        assert_eq!(config.limit, 20);
        assert_eq!(config.result_count, 15);
    }

    #[test]
    fn test_null_and_empty_next_cursor() {
        let null: PagingConfig = serde_json::from_str(
            r#"{"uri":"/items","storage_key":"k","cursor":true,"next_cursor":null,"limit":10,"results":3}"#,
        )
        .unwrap();
        assert_eq!(null.next_cursor, None);

        let empty: PagingConfig = serde_json::from_str(
            r#"{"uri":"/items","storage_key":"k","cursor":true,"next_cursor":"","limit":10,"results":3}"#,
        )
        .unwrap();
        assert_eq!(empty.next_cursor, None);
    }

    #[test]
    fn test_current_cursor_marks_history_expected() {
        let config: PagingConfig = serde_json::from_str(
            r#"{"uri":"/items","storage_key":"k","cursor":true,"current_cursor":"c1","limit":10}"#,
        )
        .unwrap();
        assert!(config.expects_history());
        assert_eq!(config.result_count, 0);

        let first = PagingConfig::new("/items", "k", 10).with_current_cursor("");
        assert!(!first.expects_history());
    }

    #[test]
    fn test_request_query_fills_missing_cursor() {
        let config = PagingConfig::new("/items", "k", 10).with_request_query("?cursor=c2&limit=10");
        assert_eq!(config.current_cursor.as_deref(), Some("c2"));

        let page_one = PagingConfig::new("/items", "k", 10).with_request_query("?limit=10");
        assert!(!page_one.expects_history());
    }

    #[test]
    fn test_server_cursor_wins_over_request_query() {
        let config = PagingConfig::new("/items", "k", 10)
            .with_current_cursor("from-server")
            .with_request_query("?cursor=from-location");
        assert_eq!(config.current_cursor.as_deref(), Some("from-server"));
    }
}
