//! Route definitions for the `/notes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// GET    /                  -> list_notes
/// POST   /                  -> save_note
/// GET    /{id}              -> get_note
/// DELETE /{id}              -> delete_note
/// GET    /{id}/history      -> note_history
/// GET    /{id}/revisions    -> list_revisions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::save_note))
        .route("/{id}", get(notes::get_note).delete(notes::delete_note))
        .route("/{id}/history", get(notes::note_history))
        .route("/{id}/revisions", get(notes::list_revisions))
}
