//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Reads accept `&PgPool`; writes accept `&mut PgConnection` so callers can
//! run several of them inside one transaction.

pub mod note_repo;
pub mod note_revision_repo;

pub use note_repo::NoteRepo;
pub use note_revision_repo::NoteRevisionRepo;
