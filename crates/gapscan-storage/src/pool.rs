//! ConnectionPool — writer + read pool with round-robin selection.
//!
//! The only place in the crate that holds `Mutex<Connection>`. A pool is
//! scoped to the caller's request context and dropped with it; it is
//! never shared across unrelated asset scans as a process-wide resource.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::Connection;

use gapscan_core::StorageError;

use crate::pragmas;

/// Default number of reader connections.
const DEFAULT_READ_POOL_SIZE: usize = 2;

/// Map a driver error into the storage-agnostic error type.
pub(crate) fn sqe(e: impl std::fmt::Display) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// Connection pool for the inventory database: 1 writer + N readers.
///
/// WAL mode is enabled on all connections. Readers are selected
/// round-robin via an atomic counter.
pub struct ConnectionPool {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    read_index: AtomicUsize,
}

impl ConnectionPool {
    /// Open a file-backed pool: `read_pool_size` read-only connections
    /// plus one writer.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let pool_size = if read_pool_size == 0 {
            DEFAULT_READ_POOL_SIZE
        } else {
            read_pool_size
        };

        let writer = Connection::open(path).map_err(|e| StorageError::OpenFailed {
            message: format!("writer: {}", e),
        })?;
        pragmas::configure_connection(&writer)?;

        let mut readers = Vec::with_capacity(pool_size);
        for i in 0..pool_size {
            let reader = Connection::open_with_flags(
                path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| StorageError::OpenFailed {
                message: format!("reader {}: {}", i, e),
            })?;
            pragmas::configure_readonly_connection(&reader)?;
            readers.push(Mutex::new(reader));
        }

        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            read_index: AtomicUsize::new(0),
        })
    }

    /// Open an in-memory pool. Readers are left empty so all access
    /// shares the single writer connection; SQLite in-memory databases
    /// are not visible across separately opened connections.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = Connection::open_in_memory().map_err(|e| StorageError::OpenFailed {
            message: format!("in-memory writer: {}", e),
        })?;
        pragmas::configure_connection(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Vec::new(),
            read_index: AtomicUsize::new(0),
        })
    }

    /// Execute a closure with the writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let conn = self.writer.lock().map_err(|e| StorageError::LockPoisoned {
            message: e.to_string(),
        })?;
        f(&conn)
    }

    /// Execute a closure with a reader connection (round-robin).
    /// Falls back to the writer when no readers exist (in-memory mode).
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        if self.readers.is_empty() {
            return self.with_writer(f);
        }

        let index = self.read_index.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[index]
            .lock()
            .map_err(|e| StorageError::LockPoisoned {
                message: e.to_string(),
            })?;
        f(&conn)
    }
}
