//! Per-source extraction functions and the exhaustive dispatch.
//!
//! Every function inspects already-fetched inputs only and returns
//! zero-or-one `DataSource`. `None` is "no evidence here"; a normal
//! outcome that flows into aggregation, never an error.

use serde_json::Value;

use gapscan_core::types::catalog::FieldSpec;
use gapscan_core::types::context::{AssetContext, EnrichmentCategory};
use gapscan_core::types::source::{DataSource, SourceKind};
use gapscan_core::AssetReader;

/// Field id whose value is the asset's own environment classification,
/// and the propagation target for neighbor-derived environment.
pub const ENVIRONMENT_FIELD_ID: &str = "environment";

/// Field id aggregated from related-asset names.
pub const DEPENDENCIES_FIELD_ID: &str = "dependencies";

/// Application category that drives the `database_type` derivation.
const DATABASE_CATEGORY: &str = "database";

/// Try a single source for one field.
pub fn extract_one(
    kind: SourceKind,
    field: &FieldSpec,
    asset: &dyn AssetReader,
    ctx: &AssetContext,
) -> Option<DataSource> {
    match kind {
        SourceKind::StandardColumn => extract_standard_column(field, asset),
        SourceKind::CustomAttributes => extract_custom_attribute(field, asset),
        SourceKind::EnrichmentTechDebt => {
            extract_enrichment(EnrichmentCategory::TechDebt, field, ctx)
        }
        SourceKind::EnrichmentPerformance => {
            extract_enrichment(EnrichmentCategory::Performance, field, ctx)
        }
        SourceKind::EnrichmentCost => extract_enrichment(EnrichmentCategory::Cost, field, ctx),
        SourceKind::EnvironmentField => extract_environment(field, asset),
        SourceKind::CanonicalApplications => extract_canonical_application(field, ctx),
        SourceKind::RelatedAssets => extract_related_assets(field, ctx),
    }
}

/// A value counts as present when it is non-null and, for strings,
/// non-blank. A blank string is indistinguishable from a missing value.
fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn extract_standard_column(field: &FieldSpec, asset: &dyn AssetReader) -> Option<DataSource> {
    let value = asset.standard_column(&field.field_id)?;
    if !is_populated(value) {
        return None;
    }
    Some(DataSource::from_kind(
        SourceKind::StandardColumn,
        format!("asset.{}", field.field_id),
        value.clone(),
    ))
}

fn extract_custom_attribute(field: &FieldSpec, asset: &dyn AssetReader) -> Option<DataSource> {
    let attributes = asset.custom_attributes()?;
    // First matching path wins; the per-field path order is fixed.
    for path in &field.custom_attribute_paths {
        if let Some(value) = lookup_path(attributes, path) {
            if is_populated(value) {
                return Some(DataSource::from_kind(
                    SourceKind::CustomAttributes,
                    format!("custom_attributes.{}", path),
                    value.clone(),
                ));
            }
        }
    }
    None
}

/// Walk a direct key or dotted nested path through JSON objects.
/// A non-object mid-walk is a miss, not an error.
fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn extract_enrichment(
    category: EnrichmentCategory,
    field: &FieldSpec,
    ctx: &AssetContext,
) -> Option<DataSource> {
    // Each variant reads its own category's record only; no merging
    // across categories.
    let record = ctx.enrichment(category)?;
    let value = record.attributes.get(&field.field_id)?;
    if !is_populated(value) {
        return None;
    }
    Some(DataSource::from_kind(
        category.source_kind(),
        format!("enrichment.{}.{}", category, field.field_id),
        value.clone(),
    ))
}

fn extract_environment(field: &FieldSpec, asset: &dyn AssetReader) -> Option<DataSource> {
    if field.field_id != ENVIRONMENT_FIELD_ID {
        return None;
    }
    let environment = asset.environment()?;
    if environment.trim().is_empty() {
        return None;
    }
    Some(DataSource::from_kind(
        SourceKind::EnvironmentField,
        "asset.environment",
        Value::String(environment.to_string()),
    ))
}

fn extract_canonical_application(field: &FieldSpec, ctx: &AssetContext) -> Option<DataSource> {
    let first = ctx.applications.first()?;
    let (path, value) = match field.field_id.as_str() {
        "application_name" => (
            "canonical_applications[0].display_name".to_string(),
            Value::String(first.display_name.clone()),
        ),
        "technology_stack" => (
            "canonical_applications[0].technology_stack".to_string(),
            Value::String(first.technology_stack.clone()?),
        ),
        "business_criticality" => (
            "canonical_applications[0].business_criticality".to_string(),
            Value::String(first.business_criticality.clone()?),
        ),
        "database_type" => {
            if !ctx.applications.iter().any(|a| a.category == DATABASE_CATEGORY) {
                return None;
            }
            (
                "canonical_applications[].category".to_string(),
                Value::String(DATABASE_CATEGORY.to_string()),
            )
        }
        _ => return None,
    };
    if !is_populated(&value) {
        return None;
    }
    Some(DataSource::from_kind(
        SourceKind::CanonicalApplications,
        path,
        value,
    ))
}

fn extract_related_assets(field: &FieldSpec, ctx: &AssetContext) -> Option<DataSource> {
    if ctx.related.is_empty() {
        return None;
    }
    match field.field_id.as_str() {
        // Aggregation: enumerate related-asset names.
        DEPENDENCIES_FIELD_ID => {
            let names: Vec<Value> = ctx
                .related
                .iter()
                .map(|r| Value::String(r.name.clone()))
                .collect();
            Some(DataSource::from_kind(
                SourceKind::RelatedAssets,
                "related_assets[].name",
                Value::Array(names),
            ))
        }
        // Propagation: first non-null neighbor value in the loader's
        // name-ordered sequence. Disagreeing neighbors defer to the
        // earliest.
        ENVIRONMENT_FIELD_ID => ctx.related.iter().find_map(|r| {
            r.environment
                .as_deref()
                .filter(|e| !e.trim().is_empty())
                .map(|e| {
                    DataSource::from_kind(
                        SourceKind::RelatedAssets,
                        format!("related_assets[{}].environment", r.name),
                        Value::String(e.to_string()),
                    )
                })
        }),
        _ => None,
    }
}
