//! Storage-layer errors for the tenant-scoped context loads.

use super::error_code::{self, ErrorCode};

/// Errors that can occur in the storage layer.
///
/// Kept free of rusqlite types so that core stays storage-agnostic; the
/// storage crate maps driver errors into these variants.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("failed to open database: {message}")]
    OpenFailed { message: String },

    #[error("database busy (another operation in progress)")]
    DbBusy,

    #[error("connection lock poisoned: {message}")]
    LockPoisoned { message: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OpenFailed { .. } => error_code::STORAGE_OPEN_FAILED,
            Self::DbBusy => error_code::DB_BUSY,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
