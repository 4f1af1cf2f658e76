//! Injectable note storage.
//!
//! [`NoteStore`] is the only storage handle the service layer sees. Every
//! save writes the note row and its revision snapshot atomically: either
//! both are persisted or neither is.

use async_trait::async_trait;
use supportdesk_core::types::DbId;

use crate::error::StoreError;
use crate::models::note::{Note, PurgeSummary};
use crate::models::note_revision::NoteRevision;

pub mod memory;
pub mod postgres;

pub use memory::MemoryNoteStore;
pub use postgres::PgNoteStore;

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a note and its first revision.
    async fn create_note(&self, content: &str, author: &str) -> Result<Note, StoreError>;

    /// Update a note and append a revision. `None` if the note does not exist,
    /// in which case nothing is written.
    async fn update_note(
        &self,
        id: DbId,
        content: &str,
        author: &str,
    ) -> Result<Option<Note>, StoreError>;

    async fn find_note(&self, id: DbId) -> Result<Option<Note>, StoreError>;

    /// All notes, most recently updated first.
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError>;

    /// Revisions of one note, newest first.
    async fn list_revisions(&self, note_id: DbId) -> Result<Vec<NoteRevision>, StoreError>;

    /// Delete a note and all of its revisions. `true` if the note existed.
    async fn delete_note(&self, id: DbId) -> Result<bool, StoreError>;

    /// Delete every note and revision.
    async fn purge(&self) -> Result<PurgeSummary, StoreError>;

    /// Column names of the notes table, for diagnostics.
    async fn note_columns(&self) -> Result<Vec<String>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
