//! Repository for the `note_revisions` table.
//!
//! Revisions are append-only; they are only removed together with their note.

use sqlx::{PgConnection, PgPool};
use supportdesk_core::types::{DbId, Timestamp};

use crate::models::note_revision::NoteRevision;

/// Column list for note_revisions queries.
const COLUMNS: &str = "id, note_id, content, created_at";

/// Provides append and read operations for note revisions.
pub struct NoteRevisionRepo;

impl NoteRevisionRepo {
    /// Append a new revision snapshot stamped with the note's `updated_at`.
    pub async fn create(
        conn: &mut PgConnection,
        note_id: DbId,
        content: &str,
        created_at: Timestamp,
    ) -> Result<NoteRevision, sqlx::Error> {
        let query = format!(
            "INSERT INTO note_revisions (note_id, content, created_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteRevision>(&query)
            .bind(note_id)
            .bind(content)
            .bind(created_at)
            .fetch_one(&mut *conn)
            .await
    }

    /// List all revisions for a note, newest first.
    pub async fn list_by_note(
        pool: &PgPool,
        note_id: DbId,
    ) -> Result<Vec<NoteRevision>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM note_revisions
             WHERE note_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, NoteRevision>(&query)
            .bind(note_id)
            .fetch_all(pool)
            .await
    }

    /// Delete all revisions of one note. Returns the number of rows removed.
    pub async fn delete_by_note(
        conn: &mut PgConnection,
        note_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM note_revisions WHERE note_id = $1")
            .bind(note_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every revision. Returns the number of rows removed.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM note_revisions")
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
