//! Scan lifecycle events for host observability.

/// Emitted before any lookup, once the contract check has passed.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub asset_id: String,
    pub field_count: usize,
}

/// Emitted per catalog field after aggregation.
#[derive(Debug, Clone)]
pub struct FieldEvaluatedEvent {
    pub asset_id: String,
    pub field_id: String,
    pub is_true_gap: bool,
    pub confidence_score: f64,
}

/// Emitted when the ordered gap list is ready.
#[derive(Debug, Clone)]
pub struct ScanCompletedEvent {
    pub asset_id: String,
    pub gap_count: usize,
    pub true_gap_count: usize,
    pub duration_ms: u64,
}

/// Host hooks around the scan. All methods default to no-ops; handlers
/// are called from worker threads and must be `Send + Sync`.
pub trait ScanEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_field_evaluated(&self, _event: &FieldEvaluatedEvent) {}
    fn on_scan_completed(&self, _event: &ScanCompletedEvent) {}
}

/// Handler that ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScanHandler;

impl ScanEventHandler for NoopScanHandler {}
