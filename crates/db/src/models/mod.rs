//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus any request or summary DTOs that travel with it.

pub mod note;
pub mod note_revision;
