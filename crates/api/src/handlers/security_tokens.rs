//! Handler issuing per-session security tokens.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use supportdesk_core::roles::CapabilityTier;
use supportdesk_core::security_token::{issue_token, TokenAction, SECURITY_TOKEN_HEADER};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SecurityTokenResponse {
    pub action: TokenAction,
    pub token: String,
    /// Header name the token must be sent in.
    pub header: &'static str,
}

/// GET /api/v1/security-tokens/{action}
///
/// Issue the token for the caller's session and `action` (`notes` or
/// `maintenance`). Unknown actions are rejected by the path extractor.
pub async fn issue(
    State(state): State<AppState>,
    user: AuthUser,
    Path(action): Path<TokenAction>,
) -> AppResult<Json<DataResponse<SecurityTokenResponse>>> {
    user.actor().require(CapabilityTier::Author)?;

    let token = issue_token(
        &state.config.security_token_secret,
        action,
        user.user_id,
        &user.session_id,
    );
    tracing::debug!(user_id = user.user_id, action = action.as_str(), "Issued security token");

    Ok(Json(DataResponse {
        data: SecurityTokenResponse {
            action,
            token,
            header: SECURITY_TOKEN_HEADER,
        },
    }))
}
