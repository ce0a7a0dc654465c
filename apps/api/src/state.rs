use std::sync::Arc;

use crate::config::Config;
use crate::store::DataStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable data store. Default: InMemoryStore. The trait seam is where
    /// a relational backend would plug in.
    pub store: Arc<dyn DataStore>,
    pub config: Config,
}
