//! Error types for the gap engine.
//!
//! Contract violations (out-of-range confidence, inconsistent gaps, bad
//! asset handles) are hard failures that abort the whole asset scan.
//! Zero-row context loads are not errors; they flow into the normal
//! aggregation rule as "no corroborating data".

pub mod error_code;
pub mod gap_error;
pub mod storage_error;

pub use error_code::ErrorCode;
pub use gap_error::{GapError, GapResult};
pub use storage_error::StorageError;
