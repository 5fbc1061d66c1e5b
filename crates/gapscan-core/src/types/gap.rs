//! IntelligentGap — the per-field verdict returned to callers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::priority::FieldPriority;
use super::source::DataSource;
use crate::errors::{GapError, GapResult};

/// The gap verdict for one catalog field of one asset.
///
/// Two signals on purpose: `is_true_gap` answers "is there any evidence at
/// all", `confidence_score` answers "how confident are we this is truly
/// missing". A single weak source flips the boolean but leaves meaningful
/// residual uncertainty in the score, so callers can still prompt below
/// their own threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligentGap {
    pub field_id: String,
    pub field_name: String,
    pub priority: FieldPriority,
    pub section: String,
    pub is_true_gap: bool,
    pub confidence_score: f64,
    pub data_found: Vec<DataSource>,
}

impl IntelligentGap {
    /// Construct a gap, enforcing the invariants at the boundary:
    /// the boolean must agree with evidence-list emptiness and the score
    /// must be in [0, 1]. Violations are constructor failures, never
    /// silently coerced, so a defect in aggregation can't produce a
    /// misleading gap.
    pub fn new(
        field_id: impl Into<String>,
        field_name: impl Into<String>,
        priority: FieldPriority,
        section: impl Into<String>,
        data_found: Vec<DataSource>,
        is_true_gap: bool,
        confidence_score: f64,
    ) -> GapResult<Self> {
        let field_id = field_id.into();
        if !confidence_score.is_finite() || !(0.0..=1.0).contains(&confidence_score) {
            return Err(GapError::InvalidConfidence {
                value: confidence_score,
            });
        }
        if is_true_gap != data_found.is_empty() {
            return Err(GapError::InconsistentGap {
                field_id,
                reason: format!(
                    "is_true_gap={} but {} data sources found",
                    is_true_gap,
                    data_found.len()
                ),
            });
        }
        Ok(Self {
            field_id,
            field_name: field_name.into(),
            priority,
            section: section.into(),
            is_true_gap,
            confidence_score,
            data_found,
        })
    }

    /// The strongest evidence source, used by the pre-fill collaborator.
    /// Maximum confidence; ties break by fixed extractor precedence.
    pub fn best_source(&self) -> Option<&DataSource> {
        self.data_found.iter().max_by(|a, b| {
            match a.confidence.partial_cmp(&b.confidence).unwrap_or(Ordering::Equal) {
                // Equal confidence: the lower precedence index is stronger.
                Ordering::Equal => b
                    .source_type
                    .precedence()
                    .cmp(&a.source_type.precedence()),
                ord => ord,
            }
        })
    }

    /// Whether a human should still be asked for this field: either a
    /// true gap, or the best evidence sits below the caller's threshold.
    pub fn needs_prompt(&self, threshold: f64) -> bool {
        self.is_true_gap || self.best_source().map_or(true, |s| s.confidence < threshold)
    }
}
