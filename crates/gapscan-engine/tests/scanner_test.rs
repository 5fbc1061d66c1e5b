//! Scanner orchestration: contract checks, single context load,
//! filtering, batching, and the latency budget.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use serde_json::json;

use gapscan_core::events::{FieldEvaluatedEvent, ScanCompletedEvent, ScanEventHandler, ScanStartedEvent};
use gapscan_core::types::catalog::{FieldCatalog, FieldSpec};
use gapscan_core::types::context::{AssetContext, LinkedApplication};
use gapscan_core::types::source::SourceKind;
use gapscan_core::{
    AssetReader, AssetSnapshot, ContextLoader, FieldPriority, GapError, GapResult, ScannerConfig,
    TenantScope,
};
use gapscan_engine::{summarize, GapScanner, ScanOptions};

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Loader that serves a fabricated context and counts invocations.
struct FakeLoader {
    ctx: AssetContext,
    calls: AtomicUsize,
}

impl FakeLoader {
    fn new(ctx: AssetContext) -> Self {
        Self {
            ctx,
            calls: AtomicUsize::new(0),
        }
    }

    fn empty() -> Self {
        Self::new(AssetContext::empty())
    }
}

impl ContextLoader for FakeLoader {
    fn load_context(&self, _asset_id: &str, _tenant: &TenantScope) -> GapResult<AssetContext> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.ctx.clone())
    }
}

#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    fields: AtomicUsize,
    completed: AtomicUsize,
}

impl ScanEventHandler for CountingHandler {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }
    fn on_field_evaluated(&self, _event: &FieldEvaluatedEvent) {
        self.fields.fetch_add(1, Ordering::SeqCst);
    }
    fn on_scan_completed(&self, _event: &ScanCompletedEvent) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

fn spec(id: &str, priority: FieldPriority) -> FieldSpec {
    FieldSpec {
        field_id: id.to_string(),
        display_name: id.to_string(),
        priority,
        section: "General".to_string(),
        custom_attribute_paths: vec![id.to_string()],
    }
}

fn catalog() -> FieldCatalog {
    FieldCatalog::new(vec![
        spec("operating_system", FieldPriority::Critical),
        spec("cpu_count", FieldPriority::High),
        spec("database_type", FieldPriority::High),
        spec("environment", FieldPriority::Medium),
        spec("owner_team", FieldPriority::Low),
    ])
    .unwrap()
}

fn tenant() -> TenantScope {
    TenantScope::new("org-1", "proj-1")
}

fn scanner(loader: FakeLoader) -> GapScanner<FakeLoader> {
    GapScanner::new(loader, tenant(), ScannerConfig::default())
}

// ─── Contract preconditions ────────────────────────────────────────────────

#[test]
fn unresolvable_asset_handle_fails_before_any_lookup() {
    let s = scanner(FakeLoader::empty());
    let err = s.scan(&AssetSnapshot::new(""), &catalog());
    assert!(matches!(err, Err(GapError::InvalidAssetHandle { .. })));
    assert_eq!(
        s.loader().calls.load(Ordering::SeqCst),
        0,
        "contract errors must abort before the context load"
    );
}

// ─── Core scenarios ────────────────────────────────────────────────────────

#[test]
fn populated_numeric_column_is_not_a_true_gap() {
    let mut asset = AssetSnapshot::new("a1");
    asset.columns.insert("cpu_count".to_string(), json!(16));
    let s = scanner(FakeLoader::empty());

    // One gap entry per catalog field, catalog order preserved.
    let gaps = s.scan(&asset, &catalog()).unwrap();
    assert_eq!(gaps.len(), 5);
    let ids: Vec<&str> = gaps.iter().map(|g| g.field_id.as_str()).collect();
    assert_eq!(
        ids,
        ["operating_system", "cpu_count", "database_type", "environment", "owner_team"]
    );

    let cpu = &gaps[1];
    assert!(!cpu.is_true_gap);
    assert!(cpu.confidence_score.abs() < f64::EPSILON);

    // The populated field is absent from the true-gaps view.
    let true_gaps = s
        .scan_with_options(
            &asset,
            &catalog(),
            &ScanOptions {
                true_gaps_only: true,
                priorities: None,
            },
        )
        .unwrap();
    assert!(true_gaps.iter().all(|g| g.field_id != "cpu_count"));
}

#[test]
fn database_category_application_fills_database_type() {
    let ctx = AssetContext::new(
        vec![LinkedApplication {
            display_name: "Orders DB".to_string(),
            category: "database".to_string(),
            technology_stack: None,
            business_criticality: None,
        }],
        Vec::new(),
        Vec::new(),
    );
    let s = scanner(FakeLoader::new(ctx));
    let gaps = s.scan(&AssetSnapshot::new("a1"), &catalog()).unwrap();

    let db = gaps.iter().find(|g| g.field_id == "database_type").unwrap();
    assert!(!db.is_true_gap);
    let best = db.best_source().unwrap();
    assert_eq!(best.source_type, SourceKind::CanonicalApplications);
    assert!((best.confidence - 0.80).abs() < f64::EPSILON);
    assert!((db.confidence_score - 0.20).abs() < 1e-9);

    // And it is absent from the true-gaps view.
    let true_gaps = s
        .scan_with_options(
            &AssetSnapshot::new("a1"),
            &catalog(),
            &ScanOptions {
                true_gaps_only: true,
                priorities: None,
            },
        )
        .unwrap();
    assert!(true_gaps.iter().all(|g| g.field_id != "database_type"));
}

#[test]
fn field_with_no_evidence_anywhere_is_a_true_gap() {
    let s = scanner(FakeLoader::empty());
    let gaps = s.scan(&AssetSnapshot::new("a1"), &catalog()).unwrap();
    let os = gaps.iter().find(|g| g.field_id == "operating_system").unwrap();
    assert!(os.is_true_gap);
    assert!(os.data_found.is_empty());
    assert!((os.confidence_score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn custom_attribute_only_field_prefills_at_095() {
    let mut asset = AssetSnapshot::new("a1");
    asset.custom_attributes = Some(json!({ "operating_system": "rhel9" }));
    let s = scanner(FakeLoader::empty());
    let gaps = s.scan(&asset, &catalog()).unwrap();
    let os = gaps.iter().find(|g| g.field_id == "operating_system").unwrap();
    assert!(!os.is_true_gap);
    let best = os.best_source().unwrap();
    assert_eq!(best.source_type, SourceKind::CustomAttributes);
    assert!((best.confidence - 0.95).abs() < f64::EPSILON);
}

// ─── Context loading ───────────────────────────────────────────────────────

#[test]
fn context_is_loaded_once_per_scan_not_once_per_field() {
    let s = scanner(FakeLoader::empty());
    s.scan(&AssetSnapshot::new("a1"), &catalog()).unwrap();
    assert_eq!(s.loader().calls.load(Ordering::SeqCst), 1);
    s.scan(&AssetSnapshot::new("a2"), &catalog()).unwrap();
    assert_eq!(s.loader().calls.load(Ordering::SeqCst), 2);
}

// ─── Filters ───────────────────────────────────────────────────────────────

#[test]
fn priority_filter_keeps_critical_and_high() {
    let s = scanner(FakeLoader::empty());
    let gaps = s
        .scan_with_options(
            &AssetSnapshot::new("a1"),
            &catalog(),
            &ScanOptions::critical_and_high(),
        )
        .unwrap();
    assert_eq!(gaps.len(), 3);
    assert!(gaps
        .iter()
        .all(|g| matches!(g.priority, FieldPriority::Critical | FieldPriority::High)));
}

// ─── Events, prompting, summary ────────────────────────────────────────────

#[test]
fn events_fire_per_scan_and_per_field() {
    let s = scanner(FakeLoader::empty());
    let handler = CountingHandler::default();
    s.scan_with_handler(&AssetSnapshot::new("a1"), &catalog(), &handler)
        .unwrap();
    assert_eq!(handler.started.load(Ordering::SeqCst), 1);
    assert_eq!(handler.fields.load(Ordering::SeqCst), 5);
    assert_eq!(handler.completed.load(Ordering::SeqCst), 1);
}

#[test]
fn weak_evidence_still_prompts_under_the_threshold() {
    let ctx = AssetContext::new(
        Vec::new(),
        vec![gapscan_core::RelatedAssetRecord {
            name: "db-01".to_string(),
            environment: Some("staging".to_string()),
        }],
        Vec::new(),
    );
    let s = scanner(FakeLoader::new(ctx));
    let gaps = s.scan(&AssetSnapshot::new("a1"), &catalog()).unwrap();

    let env = gaps.iter().find(|g| g.field_id == "environment").unwrap();
    assert!(!env.is_true_gap, "propagated environment is evidence");

    // Default threshold 0.8 > 0.70, so the field is still prompted.
    let prompted = s.fields_to_prompt(&gaps);
    assert!(prompted.iter().any(|g| g.field_id == "environment"));
}

#[test]
fn summary_counts_line_up() {
    let mut asset = AssetSnapshot::new("a1");
    asset.columns.insert("cpu_count".to_string(), json!(16));
    let s = scanner(FakeLoader::empty());
    let gaps = s.scan(&asset, &catalog()).unwrap();
    let summary = summarize(&gaps);
    assert_eq!(summary.fields_evaluated, 5);
    assert_eq!(summary.true_gaps, 4);
    assert_eq!(summary.prefillable, 1);
    assert_eq!(summary.critical, 1);
    assert_eq!(summary.high, 2);
    assert_eq!(summary.medium, 1);
    assert_eq!(summary.low, 1);
}

// ─── Batch scanning ────────────────────────────────────────────────────────

#[test]
fn batch_scan_isolates_per_asset_contract_errors() {
    let s = GapScanner::new(
        FakeLoader::empty(),
        tenant(),
        ScannerConfig {
            parallelism: Some(2),
            ..ScannerConfig::default()
        },
    );
    let good = AssetSnapshot::new("a1");
    let bad = AssetSnapshot::new("");
    let assets: Vec<&dyn AssetReader> = vec![&good, &bad];
    let results = s.scan_batch(&assets, &catalog());
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(GapError::InvalidAssetHandle { .. })
    ));
}

// ─── Latency budget ────────────────────────────────────────────────────────

#[test]
fn fifty_field_catalog_scans_well_under_a_second() {
    let fields: Vec<FieldSpec> = (0..50)
        .map(|i| spec(&format!("field_{:02}", i), FieldPriority::High))
        .collect();
    let big_catalog = FieldCatalog::new(fields).unwrap();

    let mut asset = AssetSnapshot::new("a1");
    for i in 0..25 {
        asset
            .columns
            .insert(format!("field_{:02}", i), json!(format!("value-{}", i)));
    }
    let s = scanner(FakeLoader::empty());

    let started = Instant::now();
    let gaps = s.scan(&asset, &big_catalog).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(gaps.len(), 50);
    assert!(
        elapsed.as_millis() < 1000,
        "50-field scan took {:?}, budget is sub-second",
        elapsed
    );
}
