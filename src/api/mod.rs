pub mod handlers;
pub mod pages;
pub mod routes;

pub use routes::*;

use crate::search::SearchService;
use std::sync::Arc;

/// Shared application state
///
/// Carries the one search gateway handle constructed at startup;
/// request handlers never build their own engine clients.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
}

impl AppState {
    pub fn new(search: Arc<SearchService>) -> Self {
        Self { search }
    }
}
