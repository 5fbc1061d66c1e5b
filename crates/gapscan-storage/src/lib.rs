//! # gapscan-storage
//!
//! SQLite read contracts for tenant-scoped context loading.
//! WAL mode, one write-serialized connection plus a read pool; every
//! query carries both tenant identifiers.

pub mod loader;
pub mod pool;
pub mod pragmas;
pub mod queries;
pub mod schema;
pub mod tables;

pub use loader::SqliteContextLoader;
pub use pool::ConnectionPool;
pub use pragmas::{configure_connection, configure_readonly_connection};
pub use schema::TABLE_NAMES;
pub use tables::create_tables;
