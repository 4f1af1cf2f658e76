//! Business operations behind the HTTP handlers.
//!
//! Services own their storage handle and take the caller as an explicit
//! [`Actor`](supportdesk_core::roles::Actor), so they can be driven from
//! handlers and tests alike.

pub mod notes;
