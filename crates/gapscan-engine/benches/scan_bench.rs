//! Scan latency benchmark: a realistic 50-field catalog against warmed,
//! non-network-bound context.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use gapscan_core::types::catalog::{FieldCatalog, FieldSpec};
use gapscan_core::types::context::{AssetContext, LinkedApplication, RelatedAssetRecord};
use gapscan_core::{
    AssetSnapshot, ContextLoader, FieldPriority, GapResult, ScannerConfig, TenantScope,
};
use gapscan_engine::GapScanner;

struct WarmedLoader {
    ctx: AssetContext,
}

impl ContextLoader for WarmedLoader {
    fn load_context(&self, _asset_id: &str, _tenant: &TenantScope) -> GapResult<AssetContext> {
        Ok(self.ctx.clone())
    }
}

fn make_catalog(n: usize) -> FieldCatalog {
    let fields: Vec<FieldSpec> = (0..n)
        .map(|i| FieldSpec {
            field_id: format!("field_{:02}", i),
            display_name: format!("Field {:02}", i),
            priority: if i % 3 == 0 {
                FieldPriority::Critical
            } else {
                FieldPriority::High
            },
            section: format!("Section {}", i % 5),
            custom_attribute_paths: vec![format!("attrs.field_{:02}", i)],
        })
        .collect();
    FieldCatalog::new(fields).expect("unique ids")
}

fn make_asset(populated: usize) -> AssetSnapshot {
    let mut asset = AssetSnapshot::new("bench-asset");
    for i in 0..populated {
        asset
            .columns
            .insert(format!("field_{:02}", i), json!(format!("value-{}", i)));
    }
    asset.custom_attributes = Some(json!({
        "attrs": { "field_30": "from-custom", "field_31": "from-custom" }
    }));
    asset.environment = Some("production".to_string());
    asset
}

fn make_context() -> AssetContext {
    AssetContext::new(
        vec![LinkedApplication {
            display_name: "Billing Portal".to_string(),
            category: "web".to_string(),
            technology_stack: Some("java/spring".to_string()),
            business_criticality: Some("tier-1".to_string()),
        }],
        (0..10)
            .map(|i| RelatedAssetRecord {
                name: format!("neighbor-{:02}", i),
                environment: (i % 2 == 0).then(|| "production".to_string()),
            })
            .collect(),
        Vec::new(),
    )
}

fn bench_scan(c: &mut Criterion) {
    let scanner = GapScanner::new(
        WarmedLoader {
            ctx: make_context(),
        },
        TenantScope::new("org-bench", "proj-bench"),
        ScannerConfig::default(),
    );
    let catalog_50 = make_catalog(50);
    let catalog_200 = make_catalog(200);
    let asset = make_asset(25);

    c.bench_function("scan_50_fields", |b| {
        b.iter(|| {
            let gaps = scanner.scan(black_box(&asset), black_box(&catalog_50)).unwrap();
            black_box(gaps);
        })
    });

    c.bench_function("scan_200_fields", |b| {
        b.iter(|| {
            let gaps = scanner.scan(black_box(&asset), black_box(&catalog_200)).unwrap();
            black_box(gaps);
        })
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
