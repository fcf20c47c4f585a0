use std::sync::Arc;

use gallery_store::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store is held
/// as a trait object so a persistent backend can replace the in-memory one
/// without touching handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog storage backend.
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
