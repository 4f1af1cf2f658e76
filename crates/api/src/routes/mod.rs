pub mod health;
pub mod maintenance;
pub mod notes;
pub mod security_tokens;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /security-tokens/{action}          issue token (notes | maintenance)
///
/// /notes                             list, save
/// /notes/{id}                        get, delete
/// /notes/{id}/history                change feed (?diff=aligned|lcs)
/// /notes/{id}/revisions              raw revision snapshots
///
/// /admin/notes/purge                 delete every note (POST)
/// /admin/notes/schema                notes table diagnostic
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/security-tokens", security_tokens::router())
        .nest("/notes", notes::router())
        .nest("/admin/notes", maintenance::router())
}
