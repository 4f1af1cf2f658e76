//! Route definitions for `/admin/notes`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// Routes mounted at `/admin/notes`.
///
/// ```text
/// POST   /purge     -> purge_notes
/// GET    /schema    -> describe_schema
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/purge", post(maintenance::purge_notes))
        .route("/schema", get(maintenance::describe_schema))
}
