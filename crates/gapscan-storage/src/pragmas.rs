//! SQLite PRAGMA configuration for inventory connections.
//!
//! Must be called on every connection immediately after opening.

use rusqlite::Connection;

use gapscan_core::StorageError;

use crate::pool::sqe;

/// Configure a read-write connection:
/// - WAL for concurrent readers during writes
/// - busy_timeout for lock contention (primary concurrency mechanism)
/// - NORMAL synchronous for WAL durability trade-off
pub fn configure_connection(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(sqe)
}

/// Configure a read-only connection. Same PRAGMAs plus `query_only = ON`
/// to prevent accidental writes through this connection.
pub fn configure_readonly_connection(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        PRAGMA query_only = ON;
        ",
    )
    .map_err(sqe)
}
