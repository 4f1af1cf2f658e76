//! Handlers for the `/notes` resource.
//!
//! Reads need an authenticated user; saves and deletes additionally need a
//! `notes` security token. Capability checks happen in [`NotesService`].
//!
//! [`NotesService`]: crate::service::notes::NotesService

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use supportdesk_core::diff::DiffMode;
use supportdesk_core::history::HistoryEntry;
use supportdesk_core::types::DbId;
use supportdesk_db::models::note::{Note, SaveNote};
use supportdesk_db::models::note_revision::NoteRevision;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::security_token::NotesToken;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notes/{id}/history`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub diff: DiffMode,
}

/// Response body for `DELETE /notes/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub deleted: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/notes
pub async fn list_notes(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Note>>>> {
    let notes = state.notes.list_notes(&user.actor()).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /api/v1/notes
///
/// Create (`note_id` 0 or omitted) or update a note. Returns 201 Created for
/// a new note and 200 OK for an update.
pub async fn save_note(
    State(state): State<AppState>,
    token: NotesToken,
    Json(input): Json<SaveNote>,
) -> AppResult<(StatusCode, Json<DataResponse<Note>>)> {
    let saved = state.notes.save_note(&token.user.actor(), &input).await?;
    let status = if saved.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: saved.note })))
}

/// GET /api/v1/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Note>>> {
    let note = state.notes.get_note(&user.actor(), id).await?;
    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/notes/{id}
///
/// Returns `{ "deleted": false }` when the note did not exist.
pub async fn delete_note(
    State(state): State<AppState>,
    token: NotesToken,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeleteResult>>> {
    let deleted = state.notes.delete_note(&token.user.actor(), id).await?;
    Ok(Json(DataResponse {
        data: DeleteResult { deleted },
    }))
}

/// GET /api/v1/notes/{id}/history?diff=aligned|lcs
pub async fn note_history(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<DataResponse<Vec<HistoryEntry>>>> {
    let history = state
        .notes
        .note_history(&user.actor(), id, query.diff)
        .await?;
    Ok(Json(DataResponse { data: history }))
}

/// GET /api/v1/notes/{id}/revisions
pub async fn list_revisions(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<NoteRevision>>>> {
    let revisions = state.notes.list_revisions(&user.actor(), id).await?;
    Ok(Json(DataResponse { data: revisions }))
}
