//! Anti-forgery token extractors.
//!
//! Mutating routes take a [`VerifiedToken`] instead of a bare [`AuthUser`].
//! The extractor authenticates the caller, then checks the `x-security-token`
//! header against the token issued for that user, session, and action.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use supportdesk_core::error::CoreError;
use supportdesk_core::security_token::{verify_token, TokenAction, SECURITY_TOKEN_HEADER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Binds an extractor to the action its token must have been issued for.
pub trait TokenScope: Send + Sync + 'static {
    const ACTION: TokenAction;
}

pub struct NotesScope;

impl TokenScope for NotesScope {
    const ACTION: TokenAction = TokenAction::Notes;
}

pub struct MaintenanceScope;

impl TokenScope for MaintenanceScope {
    const ACTION: TokenAction = TokenAction::Maintenance;
}

/// An authenticated user whose request carried a valid security token for
/// `S::ACTION`. Rejects with 403 `INVALID_SECURITY_TOKEN` otherwise.
pub struct VerifiedToken<S: TokenScope> {
    pub user: AuthUser,
    _scope: PhantomData<S>,
}

/// Token check for saving and deleting notes.
pub type NotesToken = VerifiedToken<NotesScope>;

/// Token check for destructive maintenance.
pub type MaintenanceToken = VerifiedToken<MaintenanceScope>;

impl<S: TokenScope> FromRequestParts<AppState> for VerifiedToken<S> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let presented = parts
            .headers
            .get(SECURITY_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::SecurityToken(format!(
                    "Missing {SECURITY_TOKEN_HEADER} header"
                )))
            })?;

        verify_token(
            &state.config.security_token_secret,
            S::ACTION,
            user.user_id,
            &user.session_id,
            presented,
        )
        .inspect_err(|_| {
            tracing::warn!(
                user_id = user.user_id,
                action = S::ACTION.as_str(),
                "Rejected request with invalid security token"
            );
        })?;

        Ok(VerifiedToken {
            user,
            _scope: PhantomData,
        })
    }
}
