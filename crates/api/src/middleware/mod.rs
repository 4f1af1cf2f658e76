//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`security_token::VerifiedToken`] -- Requires a valid `x-security-token`
//!   header for the route's action.

pub mod auth;
pub mod security_token;
