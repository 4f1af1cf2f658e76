//! Note revision model.
//!
//! Revisions are immutable snapshots of note content, created on every save.

use serde::Serialize;
use sqlx::FromRow;
use supportdesk_core::history::Snapshot;
use supportdesk_core::types::{DbId, Timestamp};

/// A row from the `note_revisions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct NoteRevision {
    pub id: DbId,
    pub note_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

impl Snapshot for NoteRevision {
    fn id(&self) -> DbId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn content(&self) -> &str {
        &self.content
    }
}
