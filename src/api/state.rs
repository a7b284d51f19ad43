use std::sync::Arc;

use crate::services::{MovieCatalog, SearchController};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Stateful catalog view driven by the search endpoints
    pub controller: SearchController,
    /// Direct data access for stateless lookups
    pub catalog: Arc<dyn MovieCatalog>,
}

impl AppState {
    /// Builds the controller on top of `catalog`
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            controller: SearchController::new(catalog.clone()),
            catalog,
        }
    }
}
