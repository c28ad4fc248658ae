//! Search gateway over the remote media index
//!
//! This module owns everything between the HTTP layer and the search
//! engine:
//!
//! - **Query building**: free text plus ordered exact-match filters
//!   into an engine `_search` body ([`SearchRequest`])
//! - **Execution**: one shared HTTP client handle against the
//!   configured index ([`EngineClient`])
//! - **Normalization**: raw hits into stable [`MediaItem`] output
//!   (identifier padding, thumbnail URL, field defaults)
//! - **Envelope assembly**: paginated [`SearchPage`] results
//!
//! # Example
//!
//! ```no_run
//! use media_search_service::config::EngineConfig;
//! use media_search_service::search::{EngineClient, SearchRequest, SearchService};
//!
//! # async fn run(config: EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let service = SearchService::new(EngineClient::new(&config)?);
//!
//! let request = SearchRequest::new("cat")
//!     .with_filter("db", "st")
//!     .with_size(20);
//!
//! let page = service.search(&request).await?;
//! println!("Found {} items", page.total);
//! # Ok(())
//! # }
//! ```

mod client;
mod document;
mod error;
mod query;
mod service;

pub use client::{EngineClient, EngineHit, EngineHits, EngineResponse, EngineTotal};
pub use document::{
    format_iso_date, pad_media_id, MediaItem, DISPLAY_DATE_FORMAT, MEDIA_ID_WIDTH,
    THUMBNAIL_BASE_URL,
};
pub use error::{SearchError, SearchResult};
pub use query::{SearchRequest, DEFAULT_PAGE_SIZE, FULLTEXT_FIELD};
pub use service::{SearchPage, SearchService};
