//! Schema SQL constants for the inventory read contracts.
//!
//! Every table carries both tenant identifiers; the composite indexes
//! cover the three per-asset lookup paths.

/// V1 schema: 5 tables + 3 indexes.
pub const INVENTORY_TABLES_V1: &str = "
    CREATE TABLE IF NOT EXISTS assets (
        org_id TEXT NOT NULL,
        project_id TEXT NOT NULL,
        asset_id TEXT NOT NULL,
        name TEXT NOT NULL,
        environment TEXT,
        created_at INTEGER NOT NULL DEFAULT (unixepoch()),
        PRIMARY KEY (org_id, project_id, asset_id)
    ) STRICT;

    CREATE TABLE IF NOT EXISTS canonical_applications (
        org_id TEXT NOT NULL,
        project_id TEXT NOT NULL,
        application_id TEXT NOT NULL,
        display_name TEXT NOT NULL,
        category TEXT NOT NULL,
        technology_stack TEXT,
        business_criticality TEXT,
        created_at INTEGER NOT NULL DEFAULT (unixepoch()),
        PRIMARY KEY (org_id, project_id, application_id)
    ) STRICT;

    CREATE TABLE IF NOT EXISTS asset_application_links (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        org_id TEXT NOT NULL,
        project_id TEXT NOT NULL,
        asset_id TEXT NOT NULL,
        application_id TEXT NOT NULL,
        created_at INTEGER NOT NULL DEFAULT (unixepoch())
    ) STRICT;

    CREATE TABLE IF NOT EXISTS asset_dependencies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        org_id TEXT NOT NULL,
        project_id TEXT NOT NULL,
        source_asset_id TEXT NOT NULL,
        target_asset_id TEXT NOT NULL,
        created_at INTEGER NOT NULL DEFAULT (unixepoch())
    ) STRICT;

    CREATE TABLE IF NOT EXISTS enrichment_records (
        org_id TEXT NOT NULL,
        project_id TEXT NOT NULL,
        asset_id TEXT NOT NULL,
        category TEXT NOT NULL,
        attributes TEXT NOT NULL DEFAULT '{}',
        created_at INTEGER NOT NULL DEFAULT (unixepoch()),
        PRIMARY KEY (org_id, project_id, asset_id, category)
    ) STRICT;

    CREATE INDEX IF NOT EXISTS idx_links_asset
        ON asset_application_links(org_id, project_id, asset_id);
    CREATE INDEX IF NOT EXISTS idx_dependencies_source
        ON asset_dependencies(org_id, project_id, source_asset_id);
    CREATE INDEX IF NOT EXISTS idx_dependencies_target
        ON asset_dependencies(org_id, project_id, target_asset_id);
";

/// All 5 inventory table names.
pub const TABLE_NAMES: [&str; 5] = [
    "assets",
    "canonical_applications",
    "asset_application_links",
    "asset_dependencies",
    "enrichment_records",
];
