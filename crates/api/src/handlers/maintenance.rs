//! Handlers for `/admin/notes` maintenance endpoints.

use axum::extract::State;
use axum::Json;
use supportdesk_db::models::note::{PurgeRequest, PurgeSummary};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::security_token::MaintenanceToken;
use crate::response::DataResponse;
use crate::service::notes::SchemaReport;
use crate::state::AppState;

/// POST /api/v1/admin/notes/purge
///
/// Delete every note and revision. Needs a `maintenance` security token and
/// the body `{ "confirm": "delete" }`.
pub async fn purge_notes(
    State(state): State<AppState>,
    token: MaintenanceToken,
    Json(input): Json<PurgeRequest>,
) -> AppResult<Json<DataResponse<PurgeSummary>>> {
    let summary = state
        .notes
        .purge_all(&token.user.actor(), &input.confirm)
        .await?;
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/admin/notes/schema
pub async fn describe_schema(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<SchemaReport>>> {
    let report = state.notes.describe_schema(&user.actor()).await?;
    Ok(Json(DataResponse { data: report }))
}
