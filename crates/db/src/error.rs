/// Failure of the underlying note storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A PostgreSQL error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure reported by a non-SQL backend.
    #[error("Storage backend error: {0}")]
    Backend(String),
}
