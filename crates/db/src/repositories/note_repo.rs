//! Repository for the `notes` table.

use sqlx::{PgConnection, PgPool};
use supportdesk_core::types::DbId;

use crate::models::note::Note;

/// Column list for notes queries.
pub const COLUMNS: &str = "id, content, author, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note with `created_at = updated_at`, both stamped with
    /// the wall clock at insert time (not the transaction start).
    pub async fn create(
        conn: &mut PgConnection,
        content: &str,
        author: &str,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "WITH stamp AS (SELECT clock_timestamp() AS ts)
             INSERT INTO notes (content, author, created_at, updated_at)
             SELECT $1, $2, ts, ts FROM stamp
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(content)
            .bind(author)
            .fetch_one(&mut *conn)
            .await
    }

    /// Replace a note's content and author and bump `updated_at`.
    ///
    /// `updated_at` is taken after the row lock is held and never moves
    /// backwards, so concurrent saves are stamped in commit order.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        content: &str,
        author: &str,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET content = $2, author = $3, updated_at = GREATEST(clock_timestamp(), updated_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(content)
            .bind(author)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Find a note by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all notes, most recently updated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Delete a note. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every note. Returns the number of rows removed.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes").execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// Column names of the `notes` table in ordinal order.
    pub async fn table_columns(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT column_name::TEXT FROM information_schema.columns
             WHERE table_schema = current_schema() AND table_name = 'notes'
             ORDER BY ordinal_position",
        )
        .fetch_all(pool)
        .await
    }
}
