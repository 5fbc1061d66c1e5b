//! Per-scan, tenant-scoped context: the three multi-row external loads.

use serde::{Deserialize, Serialize};

use super::collections::FxHashMap;
use super::source::SourceKind;

/// Tenant identifiers carried into every storage query.
///
/// Both identifiers participate in every lookup; colliding asset ids
/// across tenants must never cross-contaminate a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantScope {
    pub org_id: String,
    pub project_id: String,
}

impl TenantScope {
    pub fn new(org_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            project_id: project_id.into(),
        }
    }
}

/// A canonical application record linked to the asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedApplication {
    pub display_name: String,
    pub category: String,
    pub technology_stack: Option<String>,
    pub business_criticality: Option<String>,
}

/// An asset reachable from the subject via a recorded dependency edge,
/// upstream or downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedAssetRecord {
    pub name: String,
    pub environment: Option<String>,
}

/// The three enrichment categories. Each asset has at most one record
/// per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentCategory {
    TechDebt,
    Performance,
    Cost,
}

impl EnrichmentCategory {
    pub const ALL: [EnrichmentCategory; 3] = [Self::TechDebt, Self::Performance, Self::Cost];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TechDebt => "tech_debt",
            Self::Performance => "performance",
            Self::Cost => "cost",
        }
    }

    /// The evidence source this category reports as.
    pub fn source_kind(&self) -> SourceKind {
        match self {
            Self::TechDebt => SourceKind::EnrichmentTechDebt,
            Self::Performance => SourceKind::EnrichmentPerformance,
            Self::Cost => SourceKind::EnrichmentCost,
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::TechDebt => 0,
            Self::Performance => 1,
            Self::Cost => 2,
        }
    }
}

impl std::fmt::Display for EnrichmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category-specific secondary record holding attributes not modeled
/// as first-class asset fields.
#[derive(Debug, Clone)]
pub struct EnrichmentRecord {
    pub category: EnrichmentCategory,
    pub attributes: FxHashMap<String, serde_json::Value>,
}

/// Everything the extractors read besides the asset itself.
///
/// Loaded exactly once per asset scan, passed by reference into per-field
/// evaluation, and dropped when the scan returns. Never cached across
/// scans or tenants.
#[derive(Debug, Clone, Default)]
pub struct AssetContext {
    pub applications: Vec<LinkedApplication>,
    pub related: Vec<RelatedAssetRecord>,
    enrichments: [Option<EnrichmentRecord>; 3],
}

impl AssetContext {
    /// A context with zero rows in all three loads: the valid
    /// "no corroborating data" state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(
        applications: Vec<LinkedApplication>,
        related: Vec<RelatedAssetRecord>,
        enrichment_rows: Vec<EnrichmentRecord>,
    ) -> Self {
        let mut enrichments: [Option<EnrichmentRecord>; 3] = [None, None, None];
        for record in enrichment_rows {
            let idx = record.category.index();
            enrichments[idx] = Some(record);
        }
        Self {
            applications,
            related,
            enrichments,
        }
    }

    pub fn enrichment(&self, category: EnrichmentCategory) -> Option<&EnrichmentRecord> {
        self.enrichments[category.index()].as_ref()
    }

    pub fn set_enrichment(&mut self, record: EnrichmentRecord) {
        let idx = record.category.index();
        self.enrichments[idx] = Some(record);
    }
}
