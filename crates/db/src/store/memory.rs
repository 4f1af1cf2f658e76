//! In-process [`NoteStore`] for development and tests.
//!
//! All state lives behind one `RwLock`, so a save's note write and revision
//! append are observed together.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use supportdesk_core::types::DbId;
use tokio::sync::RwLock;

use super::NoteStore;
use crate::error::StoreError;
use crate::models::note::{Note, PurgeSummary};
use crate::models::note_revision::NoteRevision;
use crate::repositories::note_repo::COLUMNS;

#[derive(Default)]
struct MemoryState {
    notes: BTreeMap<DbId, Note>,
    revisions: Vec<NoteRevision>,
    last_note_id: DbId,
    last_revision_id: DbId,
}

impl MemoryState {
    fn append_revision(&mut self, note: &Note) {
        self.last_revision_id += 1;
        self.revisions.push(NoteRevision {
            id: self.last_revision_id,
            note_id: note.id,
            content: note.content.clone(),
            created_at: note.updated_at,
        });
    }
}

/// Volatile note storage. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryNoteStore {
    state: RwLock<MemoryState>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn create_note(&self, content: &str, author: &str) -> Result<Note, StoreError> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state.last_note_id += 1;
        let note = Note {
            id: state.last_note_id,
            content: content.to_string(),
            author: author.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.notes.insert(note.id, note.clone());
        state.append_revision(&note);
        Ok(note)
    }

    async fn update_note(
        &self,
        id: DbId,
        content: &str,
        author: &str,
    ) -> Result<Option<Note>, StoreError> {
        let mut state = self.state.write().await;
        let Some(note) = state.notes.get_mut(&id) else {
            return Ok(None);
        };
        note.content = content.to_string();
        note.author = author.to_string();
        // Never behind the previous save, so revision order follows lock order.
        note.updated_at = Utc::now().max(note.updated_at);
        let note = note.clone();
        state.append_revision(&note);
        Ok(Some(note))
    }

    async fn find_note(&self, id: DbId) -> Result<Option<Note>, StoreError> {
        Ok(self.state.read().await.notes.get(&id).cloned())
    }

    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let state = self.state.read().await;
        let mut notes: Vec<Note> = state.notes.values().cloned().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    async fn list_revisions(&self, note_id: DbId) -> Result<Vec<NoteRevision>, StoreError> {
        let state = self.state.read().await;
        let mut revisions: Vec<NoteRevision> = state
            .revisions
            .iter()
            .filter(|r| r.note_id == note_id)
            .cloned()
            .collect();
        revisions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(revisions)
    }

    async fn delete_note(&self, id: DbId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        state.revisions.retain(|r| r.note_id != id);
        Ok(state.notes.remove(&id).is_some())
    }

    async fn purge(&self) -> Result<PurgeSummary, StoreError> {
        let mut state = self.state.write().await;
        let summary = PurgeSummary {
            notes_deleted: state.notes.len() as u64,
            revisions_deleted: state.revisions.len() as u64,
        };
        state.notes.clear();
        state.revisions.clear();
        Ok(summary)
    }

    async fn note_columns(&self) -> Result<Vec<String>, StoreError> {
        Ok(COLUMNS.split(", ").map(str::to_string).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
