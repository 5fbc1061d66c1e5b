//! Table creation and the ingest-path write helpers.
//!
//! The gap engine itself never writes; these helpers exist for the
//! platform's inventory ingest and for test fixtures.

use rusqlite::{params, Connection};

use gapscan_core::{EnrichmentRecord, LinkedApplication, StorageError, TenantScope};

use crate::pool::sqe;
use crate::schema::INVENTORY_TABLES_V1;

/// Create all 5 inventory tables and their indexes.
pub fn create_tables(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(INVENTORY_TABLES_V1).map_err(sqe)
}

/// Insert an asset row (name + optional environment).
pub fn insert_asset(
    conn: &Connection,
    tenant: &TenantScope,
    asset_id: &str,
    name: &str,
    environment: Option<&str>,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO assets (org_id, project_id, asset_id, name, environment)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![tenant.org_id, tenant.project_id, asset_id, name, environment],
    )
    .map_err(sqe)?;
    Ok(())
}

/// Insert a canonical application.
pub fn insert_application(
    conn: &Connection,
    tenant: &TenantScope,
    application_id: &str,
    application: &LinkedApplication,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO canonical_applications
         (org_id, project_id, application_id, display_name, category,
          technology_stack, business_criticality)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            tenant.org_id,
            tenant.project_id,
            application_id,
            application.display_name,
            application.category,
            application.technology_stack,
            application.business_criticality,
        ],
    )
    .map_err(sqe)?;
    Ok(())
}

/// Link an asset to a canonical application. Link order is preserved;
/// the first linked application drives the application-derived fields.
pub fn link_application(
    conn: &Connection,
    tenant: &TenantScope,
    asset_id: &str,
    application_id: &str,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO asset_application_links (org_id, project_id, asset_id, application_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![tenant.org_id, tenant.project_id, asset_id, application_id],
    )
    .map_err(sqe)?;
    Ok(())
}

/// Record a dependency edge between two assets.
pub fn insert_dependency(
    conn: &Connection,
    tenant: &TenantScope,
    source_asset_id: &str,
    target_asset_id: &str,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO asset_dependencies (org_id, project_id, source_asset_id, target_asset_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            tenant.org_id,
            tenant.project_id,
            source_asset_id,
            target_asset_id
        ],
    )
    .map_err(sqe)?;
    Ok(())
}

/// Upsert the (at most one) enrichment row for an asset and category.
pub fn upsert_enrichment(
    conn: &Connection,
    tenant: &TenantScope,
    asset_id: &str,
    record: &EnrichmentRecord,
) -> Result<(), StorageError> {
    let attributes = serde_json::to_string(&record.attributes).map_err(sqe)?;
    conn.execute(
        "INSERT INTO enrichment_records (org_id, project_id, asset_id, category, attributes)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT (org_id, project_id, asset_id, category)
         DO UPDATE SET attributes = excluded.attributes",
        params![
            tenant.org_id,
            tenant.project_id,
            asset_id,
            record.category.as_str(),
            attributes,
        ],
    )
    .map_err(sqe)?;
    Ok(())
}
