//! PostgreSQL-backed [`NoteStore`].

use async_trait::async_trait;
use supportdesk_core::types::DbId;

use super::NoteStore;
use crate::error::StoreError;
use crate::models::note::{Note, PurgeSummary};
use crate::models::note_revision::NoteRevision;
use crate::repositories::{NoteRepo, NoteRevisionRepo};
use crate::DbPool;

/// Note storage over a shared connection pool.
#[derive(Clone)]
pub struct PgNoteStore {
    pool: DbPool,
}

impl PgNoteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn create_note(&self, content: &str, author: &str) -> Result<Note, StoreError> {
        let mut tx = self.pool.begin().await?;
        let note = NoteRepo::create(&mut tx, content, author).await?;
        NoteRevisionRepo::create(&mut tx, note.id, content, note.updated_at).await?;
        tx.commit().await?;
        Ok(note)
    }

    async fn update_note(
        &self,
        id: DbId,
        content: &str,
        author: &str,
    ) -> Result<Option<Note>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let Some(note) = NoteRepo::update(&mut tx, id, content, author).await? else {
            tx.rollback().await?;
            return Ok(None);
        };
        NoteRevisionRepo::create(&mut tx, note.id, content, note.updated_at).await?;
        tx.commit().await?;
        Ok(Some(note))
    }

    async fn find_note(&self, id: DbId) -> Result<Option<Note>, StoreError> {
        Ok(NoteRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        Ok(NoteRepo::list(&self.pool).await?)
    }

    async fn list_revisions(&self, note_id: DbId) -> Result<Vec<NoteRevision>, StoreError> {
        Ok(NoteRevisionRepo::list_by_note(&self.pool, note_id).await?)
    }

    async fn delete_note(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;
        let revisions = NoteRevisionRepo::delete_by_note(&mut tx, id).await?;
        let deleted = NoteRepo::delete(&mut tx, id).await?;
        tx.commit().await?;
        tracing::debug!(note_id = id, revisions, deleted, "Note rows deleted");
        Ok(deleted)
    }

    async fn purge(&self) -> Result<PurgeSummary, StoreError> {
        let mut tx = self.pool.begin().await?;
        let revisions_deleted = NoteRevisionRepo::delete_all(&mut tx).await?;
        let notes_deleted = NoteRepo::delete_all(&mut tx).await?;
        tx.commit().await?;
        Ok(PurgeSummary {
            notes_deleted,
            revisions_deleted,
        })
    }

    async fn note_columns(&self) -> Result<Vec<String>, StoreError> {
        Ok(NoteRepo::table_columns(&self.pool).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
