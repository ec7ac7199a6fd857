//! Storage-specific error type wrapping sqlx errors.

/// Errors originating from the `SQLite` storage layer.
///
/// Both variants are transparent: the message is the one sqlx produced.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

