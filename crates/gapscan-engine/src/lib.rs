//! # gapscan-engine
//!
//! The decision core: eight stateless extractors over a shared per-scan
//! context, a fixed precedence/confidence model, and the scanner that
//! turns a field catalog into an ordered gap list.

pub mod aggregate;
pub mod extract;
pub mod scanner;

pub use aggregate::ConfidenceAggregator;
pub use extract::{collect_all, extract_one};
pub use scanner::{summarize, GapScanner, ScanOptions, ScanSummary};
