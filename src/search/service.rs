//! Search gateway implementation

use crate::search::client::EngineClient;
use crate::search::document::MediaItem;
use crate::search::error::SearchResult;
use crate::search::query::SearchRequest;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Paginated search result envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// Total number of matching documents (before pagination)
    pub total: u64,

    /// 1-based page number that was requested
    pub page: u32,

    /// Requested page size
    pub size: u32,

    /// Normalized items in engine relevance order
    pub results: Vec<MediaItem>,
}

/// Gateway between the HTTP layer and the search engine
///
/// Builds the engine body from a [`SearchRequest`], executes it, and
/// normalizes each hit. Engine ordering is preserved; failures are
/// logged here and propagated unretried.
pub struct SearchService {
    client: EngineClient,
}

impl SearchService {
    /// Create a gateway over an already-constructed engine client
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    /// Execute a search and assemble the paginated envelope
    pub async fn search(&self, request: &SearchRequest) -> SearchResult<SearchPage> {
        let body = request.to_engine_body();

        debug!(
            query = %request.query,
            filters = request.filters.len(),
            page = request.page,
            size = request.size,
            "Dispatching search"
        );

        let response = self.client.execute(&body).await.map_err(|e| {
            error!(error = %e, index = self.client.index(), "Search failed");
            e
        })?;

        let results = response
            .hits
            .hits
            .iter()
            .map(|hit| MediaItem::from_source(&hit.source))
            .collect();

        Ok(SearchPage {
            total: response.hits.total.value,
            page: request.page,
            size: request.size,
            results,
        })
    }
}
