//! Stable, machine-readable error codes for observability.

/// Maps each error variant to a stable code that log pipelines and
/// dashboards can key on without parsing display strings.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const INVALID_CONFIDENCE: &str = "GAP_INVALID_CONFIDENCE";
pub const INVALID_PRIORITY: &str = "GAP_INVALID_PRIORITY";
pub const INCONSISTENT_GAP: &str = "GAP_INCONSISTENT_GAP";
pub const INVALID_ASSET_HANDLE: &str = "GAP_INVALID_ASSET_HANDLE";
pub const DUPLICATE_FIELD: &str = "GAP_DUPLICATE_FIELD";
pub const CATALOG_PARSE: &str = "GAP_CATALOG_PARSE";
pub const CONFIG_ERROR: &str = "GAP_CONFIG_ERROR";
pub const SERIALIZATION: &str = "GAP_SERIALIZATION";

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const STORAGE_OPEN_FAILED: &str = "STORAGE_OPEN_FAILED";
pub const DB_BUSY: &str = "DB_BUSY";
