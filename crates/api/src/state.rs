use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::notes::NotesService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Note operations over the injected store.
    pub notes: NotesService,
    /// Server configuration (accessed by extractors and handlers).
    pub config: Arc<ServerConfig>,
}
