//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token validation (and generation for identity
//!   providers and tests sharing the signing secret).

pub mod jwt;
