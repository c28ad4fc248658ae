//! Search request building

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Index field the full-text clause matches against
pub const FULLTEXT_FIELD: &str = "suchtext";

/// Default page size when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A search request against the media index
///
/// `filters` preserves the insertion order of the incoming parameters;
/// every entry becomes an exact-field-match clause ANDed with the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; empty means no full-text clause
    pub query: String,

    /// Ordered (field, value) pairs for exact-match filtering
    pub filters: Vec<(String, String)>,

    /// 1-based page number
    pub page: u32,

    /// Number of results per page
    pub size: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new("")
    }
}

impl SearchRequest {
    /// Create a new search request with default pagination
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: Vec::new(),
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Add an exact-match filter clause
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Replace the full filter list
    pub fn with_filters(mut self, filters: Vec<(String, String)>) -> Self {
        self.filters = filters;
        self
    }

    /// Set the page number (1-based)
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Offset of the first hit for the requested page
    ///
    /// Pagination is 1-based; an explicit `page=0` saturates to the
    /// first page instead of underflowing.
    pub fn from_offset(&self) -> u32 {
        self.page.saturating_sub(1) * self.size
    }

    /// Build the engine `_search` body for this request
    ///
    /// A non-empty query contributes one `multi_match` clause; each
    /// filter contributes one `match` clause; all clauses combine
    /// under `bool.must`. With no clauses at all the body degenerates
    /// to `match_all`.
    pub fn to_engine_body(&self) -> Value {
        let mut must: Vec<Value> = Vec::new();

        if !self.query.is_empty() {
            must.push(json!({
                "multi_match": {
                    "query": self.query,
                    "fields": [FULLTEXT_FIELD],
                }
            }));
        }

        for (field, value) in &self.filters {
            let mut clause = Map::new();
            clause.insert(field.clone(), Value::String(value.clone()));
            must.push(json!({ "match": Value::Object(clause) }));
        }

        let query = if must.is_empty() {
            json!({ "match_all": {} })
        } else {
            json!({ "bool": { "must": must } })
        };

        json!({
            "from": self.from_offset(),
            "size": self.size,
            "query": query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all_when_no_query_and_no_filters() {
        let body = SearchRequest::new("").to_engine_body();
        assert_eq!(body["query"], json!({ "match_all": {} }));
        assert_eq!(body["from"], 0);
        assert_eq!(body["size"], DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_filters_only_has_no_fulltext_clause() {
        let body = SearchRequest::new("")
            .with_filter("color", "red")
            .to_engine_body();

        let must = body["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 1);
        assert_eq!(must[0], json!({ "match": { "color": "red" } }));
    }

    #[test]
    fn test_query_adds_single_fulltext_clause() {
        let body = SearchRequest::new("cat").to_engine_body();

        let must = body["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 1);
        assert_eq!(
            must[0],
            json!({ "multi_match": { "query": "cat", "fields": [FULLTEXT_FIELD] } })
        );
    }

    #[test]
    fn test_query_and_filters_combine_under_must() {
        let body = SearchRequest::new("cat")
            .with_filter("color", "red")
            .with_filter("fotografen", "anon")
            .to_engine_body();

        let must = body["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 3);
        // Full-text clause first, then filters in insertion order
        assert!(must[0].get("multi_match").is_some());
        assert_eq!(must[1], json!({ "match": { "color": "red" } }));
        assert_eq!(must[2], json!({ "match": { "fotografen": "anon" } }));
    }

    #[test]
    fn test_pagination_offset() {
        for (page, size, expected) in [(1, 20, 0), (2, 20, 20), (3, 7, 14), (10, 50, 450)] {
            let request = SearchRequest::new("").with_page(page).with_size(size);
            assert_eq!(request.from_offset(), expected);
            assert_eq!(request.to_engine_body()["from"], expected);
        }
    }

    #[test]
    fn test_page_zero_saturates_to_first_page() {
        let request = SearchRequest::new("").with_page(0).with_size(20);
        assert_eq!(request.from_offset(), 0);
    }
}
