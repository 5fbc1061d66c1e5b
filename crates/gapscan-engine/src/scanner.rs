//! GapScanner — loads context once, runs extractors per field,
//! aggregates, returns the ordered gap list.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use gapscan_core::events::{
    FieldEvaluatedEvent, NoopScanHandler, ScanCompletedEvent, ScanEventHandler, ScanStartedEvent,
};
use gapscan_core::types::catalog::{FieldCatalog, FieldSpec};
use gapscan_core::types::context::AssetContext;
use gapscan_core::{
    AssetReader, ContextLoader, FieldPriority, GapError, GapResult, IntelligentGap, ScannerConfig,
    TenantScope,
};

use crate::aggregate::ConfidenceAggregator;
use crate::extract::collect_all;

/// Post-filters applied to the ordered gap list.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Keep only fields with no evidence anywhere.
    pub true_gaps_only: bool,
    /// Keep only these priorities. `None` keeps all four.
    pub priorities: Option<Vec<FieldPriority>>,
}

impl ScanOptions {
    /// The typical downstream need: critical + high only.
    pub fn critical_and_high() -> Self {
        Self {
            true_gaps_only: false,
            priorities: Some(vec![FieldPriority::Critical, FieldPriority::High]),
        }
    }

    fn keeps(&self, gap: &IntelligentGap) -> bool {
        if self.true_gaps_only && !gap.is_true_gap {
            return false;
        }
        match &self.priorities {
            Some(wanted) => wanted.contains(&gap.priority),
            None => true,
        }
    }
}

/// Aggregate view of one scan's result, for logs and dashboards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    pub fields_evaluated: usize,
    pub true_gaps: usize,
    pub prefillable: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub avg_confidence_score: f64,
}

/// Orchestrates one asset's gap scan against a bound tenant scope.
///
/// Pure computation over immutable snapshots: the loader is consulted
/// exactly once per scan, per-field evaluation only reads the shared
/// context, and nothing is cached across scans.
pub struct GapScanner<L: ContextLoader> {
    loader: L,
    tenant: TenantScope,
    config: ScannerConfig,
    aggregator: ConfidenceAggregator,
}

impl<L: ContextLoader> GapScanner<L> {
    pub fn new(loader: L, tenant: TenantScope, config: ScannerConfig) -> Self {
        Self {
            loader,
            tenant,
            config,
            aggregator: ConfidenceAggregator::new(),
        }
    }

    pub fn tenant(&self) -> &TenantScope {
        &self.tenant
    }

    /// The bound context loader, for callers that need to share it.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Scan one asset against the catalog. Gap order matches catalog
    /// order.
    pub fn scan(
        &self,
        asset: &dyn AssetReader,
        catalog: &FieldCatalog,
    ) -> GapResult<Vec<IntelligentGap>> {
        self.scan_with_handler(asset, catalog, &NoopScanHandler)
    }

    /// Scan with host event hooks.
    pub fn scan_with_handler(
        &self,
        asset: &dyn AssetReader,
        catalog: &FieldCatalog,
        handler: &dyn ScanEventHandler,
    ) -> GapResult<Vec<IntelligentGap>> {
        let asset_id = asset.asset_id();
        // Caller bug, not a runtime condition: fail before any lookup.
        if asset_id.trim().is_empty() {
            return Err(GapError::InvalidAssetHandle {
                reason: "asset handle does not resolve to an identifier".to_string(),
            });
        }

        let started = Instant::now();
        handler.on_scan_started(&ScanStartedEvent {
            asset_id: asset_id.to_string(),
            field_count: catalog.len(),
        });

        // One context load per asset, never per field.
        let ctx = self.loader.load_context(asset_id, &self.tenant)?;
        let gaps = self.evaluate_fields(asset, catalog, &ctx, handler)?;

        let true_gap_count = gaps.iter().filter(|g| g.is_true_gap).count();
        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(
            asset_id,
            fields = gaps.len(),
            true_gaps = true_gap_count,
            duration_ms,
            "gap scan complete"
        );
        handler.on_scan_completed(&ScanCompletedEvent {
            asset_id: asset_id.to_string(),
            gap_count: gaps.len(),
            true_gap_count,
            duration_ms,
        });
        Ok(gaps)
    }

    /// Scan and post-filter (true-gaps-only and/or a priority subset).
    pub fn scan_with_options(
        &self,
        asset: &dyn AssetReader,
        catalog: &FieldCatalog,
        options: &ScanOptions,
    ) -> GapResult<Vec<IntelligentGap>> {
        let gaps = self.scan(asset, catalog)?;
        Ok(gaps.into_iter().filter(|g| options.keeps(g)).collect())
    }

    /// Scan many assets against one catalog. Embarrassingly parallel
    /// across assets, bounded by the configured worker count so the
    /// storage layer is not hit with an unbounded 3 × N query fan-out.
    /// A contract error aborts that asset's scan only.
    pub fn scan_batch(
        &self,
        assets: &[&dyn AssetReader],
        catalog: &FieldCatalog,
    ) -> Vec<GapResult<Vec<IntelligentGap>>> {
        let run = || {
            assets
                .par_iter()
                .map(|asset| self.scan(*asset, catalog))
                .collect()
        };
        match self.worker_pool() {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    /// Fields a human should still be asked about, per the configured
    /// prompt threshold.
    pub fn fields_to_prompt<'a>(&self, gaps: &'a [IntelligentGap]) -> Vec<&'a IntelligentGap> {
        let threshold = self.config.effective_prompt_threshold();
        gaps.iter().filter(|g| g.needs_prompt(threshold)).collect()
    }

    fn evaluate_fields(
        &self,
        asset: &dyn AssetReader,
        catalog: &FieldCatalog,
        ctx: &AssetContext,
        handler: &dyn ScanEventHandler,
    ) -> GapResult<Vec<IntelligentGap>> {
        let evaluate = |field: &FieldSpec| -> GapResult<IntelligentGap> {
            let found = collect_all(field, asset, ctx);
            let gap = self.aggregator.aggregate(field, found)?;
            handler.on_field_evaluated(&FieldEvaluatedEvent {
                asset_id: asset.asset_id().to_string(),
                field_id: gap.field_id.clone(),
                is_true_gap: gap.is_true_gap,
                confidence_score: gap.confidence_score,
            });
            Ok(gap)
        };

        // Per-field evaluation has no ordering dependency; fan out for
        // larger catalogs, stay serial below the threshold. Both paths
        // preserve catalog order.
        if catalog.len() >= self.config.effective_parallel_field_threshold() {
            catalog.fields().par_iter().map(evaluate).collect()
        } else {
            catalog.fields().iter().map(evaluate).collect()
        }
    }

    fn worker_pool(&self) -> Option<rayon::ThreadPool> {
        let threads = self.config.effective_parallelism();
        if threads == 0 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                tracing::warn!(error = %e, "failed to build bounded worker pool, using global pool");
                None
            }
        }
    }
}

/// Summarize an ordered gap list.
pub fn summarize(gaps: &[IntelligentGap]) -> ScanSummary {
    let mut summary = ScanSummary {
        fields_evaluated: gaps.len(),
        ..ScanSummary::default()
    };
    let mut score_total = 0.0;
    for gap in gaps {
        score_total += gap.confidence_score;
        if gap.is_true_gap {
            summary.true_gaps += 1;
        } else {
            summary.prefillable += 1;
        }
        match gap.priority {
            FieldPriority::Critical => summary.critical += 1,
            FieldPriority::High => summary.high += 1,
            FieldPriority::Medium => summary.medium += 1,
            FieldPriority::Low => summary.low += 1,
        }
    }
    if !gaps.is_empty() {
        summary.avg_confidence_score = score_total / gaps.len() as f64;
    }
    summary
}
