//! The eight evidence sources with fixed confidence and precedence.

use serde::{Deserialize, Serialize};

use crate::errors::{GapError, GapResult};

/// The eight recognized extraction paths, in fixed precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Native asset attribute; the authoritative source of truth.
    StandardColumn,
    /// Free-form key/value map attached to the asset.
    CustomAttributes,
    /// Tech-debt enrichment record.
    EnrichmentTechDebt,
    /// Performance enrichment record.
    EnrichmentPerformance,
    /// Cost enrichment record.
    EnrichmentCost,
    /// The asset's scalar environment classification.
    EnvironmentField,
    /// Linked canonical application records.
    CanonicalApplications,
    /// Topologically related assets (dependency edges).
    RelatedAssets,
}

impl SourceKind {
    /// All eight sources, strongest first. Confidence ties break by
    /// position in this array.
    pub const ALL: [SourceKind; 8] = [
        Self::StandardColumn,
        Self::CustomAttributes,
        Self::EnrichmentTechDebt,
        Self::EnrichmentPerformance,
        Self::EnrichmentCost,
        Self::EnvironmentField,
        Self::CanonicalApplications,
        Self::RelatedAssets,
    ];

    /// Fixed confidence for evidence found through this source.
    pub fn confidence(&self) -> f64 {
        match self {
            Self::StandardColumn => 1.0,
            Self::CustomAttributes => 0.95,
            Self::EnrichmentTechDebt => 0.90,
            Self::EnrichmentPerformance => 0.90,
            Self::EnrichmentCost => 0.90,
            Self::EnvironmentField => 0.85,
            Self::CanonicalApplications => 0.80,
            Self::RelatedAssets => 0.70,
        }
    }

    /// Position in the precedence order; lower wins confidence ties.
    pub fn precedence(&self) -> usize {
        Self::ALL
            .iter()
            .position(|k| k == self)
            .unwrap_or(Self::ALL.len())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StandardColumn => "standard_column",
            Self::CustomAttributes => "custom_attributes",
            Self::EnrichmentTechDebt => "enrichment_tech_debt",
            Self::EnrichmentPerformance => "enrichment_performance",
            Self::EnrichmentCost => "enrichment_cost",
            Self::EnvironmentField => "environment_field",
            Self::CanonicalApplications => "canonical_applications",
            Self::RelatedAssets => "related_assets",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of evidence that a field is populated somewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    /// Where the value was found.
    pub source_type: SourceKind,
    /// Human-readable locator (e.g. "custom_attributes.os.version").
    pub field_path: String,
    /// The found value, opaque to the engine.
    pub value: serde_json::Value,
    /// How authoritative this source is, in [0, 1].
    pub confidence: f64,
}

impl DataSource {
    /// Create a data source, rejecting out-of-range confidence.
    pub fn new(
        source_type: SourceKind,
        field_path: impl Into<String>,
        value: serde_json::Value,
        confidence: f64,
    ) -> GapResult<Self> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(GapError::InvalidConfidence { value: confidence });
        }
        Ok(Self {
            source_type,
            field_path: field_path.into(),
            value,
            confidence,
        })
    }

    /// Create a data source stamped with the kind's canonical confidence.
    pub fn from_kind(
        source_type: SourceKind,
        field_path: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            value,
            confidence: source_type.confidence(),
            source_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_out_of_range_is_rejected() {
        for bad in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            let result = DataSource::new(
                SourceKind::StandardColumn,
                "asset.os",
                serde_json::json!("linux"),
                bad,
            );
            assert!(result.is_err(), "confidence {} should be rejected", bad);
        }
    }

    #[test]
    fn canonical_confidences_descend_with_precedence() {
        let confidences: Vec<f64> = SourceKind::ALL.iter().map(|k| k.confidence()).collect();
        for pair in confidences.windows(2) {
            assert!(pair[0] >= pair[1], "precedence order must not invert confidence");
        }
    }

    #[test]
    fn precedence_matches_array_position() {
        for (i, kind) in SourceKind::ALL.iter().enumerate() {
            assert_eq!(kind.precedence(), i);
        }
    }
}
