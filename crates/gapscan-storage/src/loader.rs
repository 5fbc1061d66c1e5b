//! SqliteContextLoader — the production `ContextLoader`.

use std::path::Path;
use std::sync::Arc;

use gapscan_core::{AssetContext, ContextLoader, GapResult, StorageError, TenantScope};

use crate::pool::ConnectionPool;
use crate::queries;

/// Loads the three per-asset contexts from the inventory database.
///
/// Holds a connection pool scoped to the caller's request; dropping the
/// loader releases the connections. Nothing is cached between calls.
pub struct SqliteContextLoader {
    pool: Arc<ConnectionPool>,
}

impl SqliteContextLoader {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Open a file-backed loader with the given reader count.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        Ok(Self::new(Arc::new(ConnectionPool::open(
            path,
            read_pool_size,
        )?)))
    }

    pub fn pool(&self) -> &Arc<ConnectionPool> {
        &self.pool
    }
}

impl ContextLoader for SqliteContextLoader {
    fn load_context(&self, asset_id: &str, tenant: &TenantScope) -> GapResult<AssetContext> {
        // The three loads are mutually independent; issue them
        // concurrently across the reader pool instead of sequentially.
        let (applications, (related, enrichments)) = rayon::join(
            || {
                self.pool
                    .with_reader(|conn| queries::linked_applications(conn, tenant, asset_id))
            },
            || {
                rayon::join(
                    || {
                        self.pool
                            .with_reader(|conn| queries::related_assets(conn, tenant, asset_id))
                    },
                    || {
                        self.pool
                            .with_reader(|conn| queries::enrichment_rows(conn, tenant, asset_id))
                    },
                )
            },
        );
        Ok(AssetContext::new(applications?, related?, enrichments?))
    }
}
