//! Note model and related DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use supportdesk_core::notes::NEW_NOTE_ID;
use supportdesk_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub content: String,
    /// Display name of the last person to save the note.
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a note. `note_id` of `0` (or omitted) creates a new note.
#[derive(Debug, Deserialize)]
pub struct SaveNote {
    #[serde(default = "new_note_id")]
    pub note_id: DbId,
    pub content: String,
}

fn new_note_id() -> DbId {
    NEW_NOTE_ID
}

/// Request body for purging every note and revision.
#[derive(Debug, Deserialize)]
pub struct PurgeRequest {
    pub confirm: String,
}

/// Row counts removed by a purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurgeSummary {
    pub notes_deleted: u64,
    pub revisions_deleted: u64,
}
