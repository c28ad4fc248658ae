//! Error types for search operations

use crate::error::AppError;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while talking to the search engine
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// HTTP client construction failed
    #[error("HTTP client construction failed: {0}")]
    ClientConstruction(String),

    /// Request to the engine could not be completed
    #[error("Search execution failed: {0}")]
    ExecutionFailed(String),

    /// Engine request timed out
    #[error("Search engine request timed out after {0} seconds")]
    Timeout(u64),

    /// Engine answered with a non-success status
    #[error("Search engine returned status {status}: {body}")]
    EngineStatus { status: u16, body: String },

    /// Engine answered 2xx but the body did not decode
    #[error("Undecodable engine response: {0}")]
    InvalidResponse(String),
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::Search(err.to_string())
    }
}
