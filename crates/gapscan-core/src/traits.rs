//! Seam traits: the narrow asset accessor and the context loader.
//!
//! Attribute-by-name access to storage rows stays behind `AssetReader`,
//! and the three per-asset context queries stay behind `ContextLoader`,
//! so the engine is testable with fabricated snapshots and contexts.

use std::sync::Arc;

use serde_json::Value;

use crate::errors::GapResult;
use crate::types::collections::FxHashMap;
use crate::types::context::{AssetContext, TenantScope};

/// Read-only view of one inventory asset: exactly the surface the gap
/// engine needs, decoupled from any storage representation.
pub trait AssetReader: Send + Sync {
    /// Stable identifier for the asset. Empty means the handle is not
    /// resolvable, which is a caller bug.
    fn asset_id(&self) -> &str;

    /// A native ("standard column") attribute by field id.
    fn standard_column(&self, field_id: &str) -> Option<&Value>;

    /// The free-form key/value map attached to the asset, if any.
    /// Expected to be a JSON object when present.
    fn custom_attributes(&self) -> Option<&Value>;

    /// The asset's scalar environment classification (e.g. a
    /// deployment-stage label).
    fn environment(&self) -> Option<&str>;
}

/// Concrete, owned snapshot of an asset's readable surface. Used by the
/// storage layer when materializing assets and by tests for fabricated
/// inputs.
#[derive(Debug, Clone, Default)]
pub struct AssetSnapshot {
    pub id: String,
    pub columns: FxHashMap<String, Value>,
    pub custom_attributes: Option<Value>,
    pub environment: Option<String>,
}

impl AssetSnapshot {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl AssetReader for AssetSnapshot {
    fn asset_id(&self) -> &str {
        &self.id
    }

    fn standard_column(&self, field_id: &str) -> Option<&Value> {
        self.columns.get(field_id)
    }

    fn custom_attributes(&self) -> Option<&Value> {
        self.custom_attributes.as_ref()
    }

    fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }
}

/// Issues the three tenant-scoped reads for one asset. Implementations
/// must scope every query by both tenant identifiers; zero rows is a
/// valid outcome, not an error.
pub trait ContextLoader: Send + Sync {
    /// Load linked canonical applications, related assets, and the (up
    /// to three) enrichment rows. Called exactly once per asset scan.
    fn load_context(&self, asset_id: &str, tenant: &TenantScope) -> GapResult<AssetContext>;
}

impl<T: ContextLoader + ?Sized> ContextLoader for Arc<T> {
    fn load_context(&self, asset_id: &str, tenant: &TenantScope) -> GapResult<AssetContext> {
        (**self).load_context(asset_id, tenant)
    }
}
