//! Domain logic for the support notes service.
//!
//! This crate has no storage or HTTP dependencies: it holds the error
//! taxonomy, caller identity and capability tiers, note validation, the
//! line diff engine, history assembly, and anti-forgery token signing.

pub mod diff;
pub mod error;
pub mod history;
pub mod notes;
pub mod roles;
pub mod security_token;
pub mod types;
