//! The three parameterized, read-only, tenant-scoped context queries.
//!
//! Zero rows is a valid "no corroborating data" outcome and never an
//! error. Every query filters on both tenant identifiers so colliding
//! asset ids across tenants cannot cross-contaminate a scan.

use rusqlite::{params, Connection};

use gapscan_core::{
    EnrichmentCategory, EnrichmentRecord, FxHashMap, LinkedApplication, RelatedAssetRecord,
    StorageError, TenantScope,
};

use crate::pool::sqe;

/// Canonical applications linked to the asset, in link-insertion order.
pub fn linked_applications(
    conn: &Connection,
    tenant: &TenantScope,
    asset_id: &str,
) -> Result<Vec<LinkedApplication>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT a.display_name, a.category, a.technology_stack, a.business_criticality
             FROM asset_application_links l
             JOIN canonical_applications a
               ON a.org_id = l.org_id
              AND a.project_id = l.project_id
              AND a.application_id = l.application_id
             WHERE l.org_id = ?1 AND l.project_id = ?2 AND l.asset_id = ?3
             ORDER BY l.id",
        )
        .map_err(sqe)?;
    let rows = stmt
        .query_map(
            params![tenant.org_id, tenant.project_id, asset_id],
            |row| {
                Ok(LinkedApplication {
                    display_name: row.get(0)?,
                    category: row.get(1)?,
                    technology_stack: row.get(2)?,
                    business_criticality: row.get(3)?,
                })
            },
        )
        .map_err(sqe)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sqe)
}

/// Assets reachable via a dependency edge, upstream or downstream.
/// Name-ordered so propagation extraction is deterministic.
pub fn related_assets(
    conn: &Connection,
    tenant: &TenantScope,
    asset_id: &str,
) -> Result<Vec<RelatedAssetRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT DISTINCT s.name, s.environment
             FROM asset_dependencies d
             JOIN assets s
               ON s.org_id = d.org_id
              AND s.project_id = d.project_id
              AND s.asset_id = CASE
                  WHEN d.source_asset_id = ?3 THEN d.target_asset_id
                  ELSE d.source_asset_id
              END
             WHERE d.org_id = ?1 AND d.project_id = ?2
               AND (d.source_asset_id = ?3 OR d.target_asset_id = ?3)
             ORDER BY s.name",
        )
        .map_err(sqe)?;
    let rows = stmt
        .query_map(
            params![tenant.org_id, tenant.project_id, asset_id],
            |row| {
                Ok(RelatedAssetRecord {
                    name: row.get(0)?,
                    environment: row.get(1)?,
                })
            },
        )
        .map_err(sqe)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sqe)
}

/// The asset's enrichment rows, at most one per category. Rows with an
/// unknown category label are skipped with a warning rather than
/// failing the load.
pub fn enrichment_rows(
    conn: &Connection,
    tenant: &TenantScope,
    asset_id: &str,
) -> Result<Vec<EnrichmentRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT category, attributes
             FROM enrichment_records
             WHERE org_id = ?1 AND project_id = ?2 AND asset_id = ?3",
        )
        .map_err(sqe)?;
    let rows = stmt
        .query_map(
            params![tenant.org_id, tenant.project_id, asset_id],
            |row| {
                let category: String = row.get(0)?;
                let attributes: String = row.get(1)?;
                Ok((category, attributes))
            },
        )
        .map_err(sqe)?;

    let mut records = Vec::new();
    for row in rows {
        let (category, attributes) = row.map_err(sqe)?;
        let Some(category) = parse_category(&category) else {
            tracing::warn!(asset_id, category = %category, "unknown enrichment category — skipping row");
            continue;
        };
        let attributes: FxHashMap<String, serde_json::Value> =
            serde_json::from_str(&attributes).map_err(sqe)?;
        records.push(EnrichmentRecord {
            category,
            attributes,
        });
    }
    Ok(records)
}

fn parse_category(label: &str) -> Option<EnrichmentCategory> {
    EnrichmentCategory::ALL
        .into_iter()
        .find(|c| c.as_str() == label)
}
