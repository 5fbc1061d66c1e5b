//! Confidence aggregation: eight extractor outputs → one gap verdict.

use gapscan_core::types::catalog::FieldSpec;
use gapscan_core::types::source::DataSource;
use gapscan_core::{GapResult, IntelligentGap};

/// Combines all extractor hits for one field into the two-signal
/// verdict.
///
/// `confidence_score` answers "how confident are we this field is truly
/// missing": empty evidence scores 1.0; otherwise 1 − max(confidence),
/// so one authoritative source collapses the score toward zero while a
/// lone topology-inferred source leaves residual uncertainty for the
/// caller's own prompt threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceAggregator;

impl ConfidenceAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(
        &self,
        field: &FieldSpec,
        data_found: Vec<DataSource>,
    ) -> GapResult<IntelligentGap> {
        let confidence_score = match max_confidence(&data_found) {
            None => 1.0,
            // Clamp guards against float error at the boundary only;
            // out-of-range inputs are already rejected at DataSource
            // construction.
            Some(max) => (1.0 - max).clamp(0.0, 1.0),
        };
        let is_true_gap = data_found.is_empty();
        IntelligentGap::new(
            field.field_id.clone(),
            field.display_name.clone(),
            field.priority,
            field.section.clone(),
            data_found,
            is_true_gap,
            confidence_score,
        )
    }
}

fn max_confidence(data_found: &[DataSource]) -> Option<f64> {
    data_found
        .iter()
        .map(|s| s.confidence)
        .fold(None, |acc, c| Some(acc.map_or(c, |a: f64| a.max(c))))
}
