use axum::routing::get;
use axum::Router;

use crate::handlers::security_tokens;
use crate::state::AppState;

/// Routes mounted at `/security-tokens`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{action}", get(security_tokens::issue))
}
