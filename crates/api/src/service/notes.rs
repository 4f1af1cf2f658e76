//! Note operations: save, read, list, history, delete, and maintenance.
//!
//! Every operation checks the actor's capability tier first, then validates
//! its input, and only then touches storage. A failed check writes nothing.

use std::sync::Arc;

use serde::Serialize;
use supportdesk_core::diff::DiffMode;
use supportdesk_core::history::{assemble_history, HistoryEntry};
use supportdesk_core::notes::{
    note_not_found, validate_content, validate_existing_id, validate_purge_confirmation,
    validate_save_id, NEW_NOTE_ID,
};
use supportdesk_core::roles::{Actor, CapabilityTier};
use supportdesk_core::types::DbId;
use supportdesk_db::models::note::{Note, PurgeSummary, SaveNote};
use supportdesk_db::models::note_revision::NoteRevision;
use supportdesk_db::store::NoteStore;

use crate::error::{AppError, AppResult};

/// Table name reported by the schema diagnostic.
const NOTES_TABLE: &str = "notes";

/// Result of [`NotesService::save_note`].
#[derive(Debug, Clone)]
pub struct SavedNote {
    pub note: Note,
    /// `true` when a new note was inserted, `false` for an update.
    pub created: bool,
}

/// Schema diagnostic for the notes table.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaReport {
    pub table: &'static str,
    pub columns: Vec<String>,
    pub has_author_column: bool,
}

#[derive(Clone)]
pub struct NotesService {
    store: Arc<dyn NoteStore>,
}

impl NotesService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn NoteStore> {
        &self.store
    }

    /// Create a note (`note_id == 0`) or update an existing one.
    ///
    /// The note row and its revision snapshot are written together. Updating
    /// an id that does not exist is `NotFound` and writes nothing.
    pub async fn save_note(&self, actor: &Actor, input: &SaveNote) -> AppResult<SavedNote> {
        actor.require(CapabilityTier::Author)?;
        validate_save_id(input.note_id)?;
        validate_content(&input.content)?;

        if input.note_id == NEW_NOTE_ID {
            let note = self
                .store
                .create_note(&input.content, &actor.display_name)
                .await?;
            tracing::info!(note_id = note.id, user_id = actor.user_id, "Note created");
            return Ok(SavedNote {
                note,
                created: true,
            });
        }

        let note = self
            .store
            .update_note(input.note_id, &input.content, &actor.display_name)
            .await?
            .ok_or_else(|| note_not_found(input.note_id))?;
        tracing::info!(note_id = note.id, user_id = actor.user_id, "Note updated");
        Ok(SavedNote {
            note,
            created: false,
        })
    }

    pub async fn get_note(&self, actor: &Actor, id: DbId) -> AppResult<Note> {
        actor.require(CapabilityTier::Author)?;
        validate_existing_id(id)?;

        let note = self
            .store
            .find_note(id)
            .await?
            .ok_or_else(|| note_not_found(id))?;
        Ok(note)
    }

    /// All notes, most recently updated first.
    pub async fn list_notes(&self, actor: &Actor) -> AppResult<Vec<Note>> {
        actor.require(CapabilityTier::Author)?;
        Ok(self.store.list_notes().await?)
    }

    /// Raw revision snapshots of one note, newest first.
    pub async fn list_revisions(&self, actor: &Actor, id: DbId) -> AppResult<Vec<NoteRevision>> {
        actor.require(CapabilityTier::Administrator)?;
        validate_existing_id(id)?;
        self.ensure_exists(id).await?;
        Ok(self.store.list_revisions(id).await?)
    }

    /// Change feed of one note: a diff per pair of adjacent revisions,
    /// newest first.
    pub async fn note_history(
        &self,
        actor: &Actor,
        id: DbId,
        mode: DiffMode,
    ) -> AppResult<Vec<HistoryEntry>> {
        actor.require(CapabilityTier::Administrator)?;
        validate_existing_id(id)?;
        self.ensure_exists(id).await?;

        let revisions = self.store.list_revisions(id).await?;
        // Diffing is CPU-bound; keep it off the async workers.
        let history = tokio::task::spawn_blocking(move || assemble_history(&revisions, mode))
            .await
            .map_err(|e| AppError::InternalError(format!("History diff task failed: {e}")))?;
        Ok(history)
    }

    /// Delete a note and its revisions. Returns whether the note existed.
    pub async fn delete_note(&self, actor: &Actor, id: DbId) -> AppResult<bool> {
        actor.require(CapabilityTier::Administrator)?;
        validate_existing_id(id)?;

        let deleted = self.store.delete_note(id).await?;
        if deleted {
            tracing::info!(note_id = id, user_id = actor.user_id, "Note deleted");
        }
        Ok(deleted)
    }

    /// Delete every note and revision. `confirm` must be the exact
    /// confirmation phrase.
    pub async fn purge_all(&self, actor: &Actor, confirm: &str) -> AppResult<PurgeSummary> {
        actor.require(CapabilityTier::Administrator)?;
        validate_purge_confirmation(confirm)?;

        let summary = self.store.purge().await?;
        tracing::warn!(
            user_id = actor.user_id,
            notes_deleted = summary.notes_deleted,
            revisions_deleted = summary.revisions_deleted,
            "All notes purged"
        );
        Ok(summary)
    }

    pub async fn describe_schema(&self, actor: &Actor) -> AppResult<SchemaReport> {
        actor.require(CapabilityTier::Administrator)?;

        let columns = self.store.note_columns().await?;
        let has_author_column = columns.iter().any(|c| c == "author");
        Ok(SchemaReport {
            table: NOTES_TABLE,
            columns,
            has_author_column,
        })
    }

    async fn ensure_exists(&self, id: DbId) -> AppResult<()> {
        match self.store.find_note(id).await? {
            Some(_) => Ok(()),
            None => Err(note_not_found(id).into()),
        }
    }
}
