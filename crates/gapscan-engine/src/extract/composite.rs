//! Runs all eight extractors for one field and keeps every hit.

use gapscan_core::types::catalog::FieldSpec;
use gapscan_core::types::context::AssetContext;
use gapscan_core::types::source::{DataSource, SourceKind};
use gapscan_core::AssetReader;

use super::collector::extract_one;

/// Collect evidence from all eight sources for a single field.
///
/// Deliberately no short-circuit on the first hit: every piece of
/// corroborating or conflicting evidence stays visible for debugging and
/// pre-fill selection. Hits arrive in fixed precedence order.
pub fn collect_all(
    field: &FieldSpec,
    asset: &dyn AssetReader,
    ctx: &AssetContext,
) -> Vec<DataSource> {
    let mut found = Vec::new();
    for kind in SourceKind::ALL {
        match extract_one(kind, field, asset, ctx) {
            Some(source) => found.push(source),
            None => {} // No evidence in this source — skip
        }
    }
    found
}
