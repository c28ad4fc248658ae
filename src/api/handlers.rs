use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::search::{SearchPage, SearchRequest, DEFAULT_PAGE_SIZE};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

/// Query parameter keys that never become filter clauses
pub const RESERVED_PARAMS: [&str; 3] = ["q", "size", "page"];

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Search API endpoint
///
/// `q`, `size`, and `page` are the reserved parameters; every other
/// pair becomes an exact-match filter, in arrival order. Failures from
/// the gateway surface as `{"error": message}` with status 500.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchPage>> {
    let request = search_request_from_params(&params, true)?;
    let page = state.search.search(&request).await?;
    Ok(Json(page))
}

/// Build a [`SearchRequest`] from raw query pairs
///
/// The first occurrence of each reserved key wins; non-reserved pairs
/// are collected as filters (in order) only when `collect_filters` is
/// set — the HTML page route accepts no arbitrary filters.
pub(crate) fn search_request_from_params(
    params: &[(String, String)],
    collect_filters: bool,
) -> Result<SearchRequest> {
    let mut query: Option<&str> = None;
    let mut size: Option<u32> = None;
    let mut page: Option<u32> = None;
    let mut filters: Vec<(String, String)> = Vec::new();

    for (key, value) in params {
        if !RESERVED_PARAMS.contains(&key.as_str()) {
            if collect_filters {
                filters.push((key.clone(), value.clone()));
            }
            continue;
        }

        match key.as_str() {
            "q" => {
                if query.is_none() {
                    query = Some(value);
                }
            }
            "size" => {
                if size.is_none() {
                    size = Some(parse_numeric_param("size", value)?);
                }
            }
            "page" => {
                if page.is_none() {
                    page = Some(parse_numeric_param("page", value)?);
                }
            }
            _ => {}
        }
    }

    Ok(SearchRequest::new(query.unwrap_or_default())
        .with_filters(filters)
        .with_size(size.unwrap_or(DEFAULT_PAGE_SIZE))
        .with_page(page.unwrap_or(1)))
}

fn parse_numeric_param(name: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid {} parameter: {}", name, value)))
}
