//! Gap-engine errors.

use super::error_code::{self, ErrorCode};
use super::storage_error::StorageError;

/// Errors produced by the gap engine.
///
/// Every variant except `Storage` and `Serialization` is a contract error:
/// it signals a caller bug or an internal aggregation defect and is never
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum GapError {
    #[error("confidence out of range [0, 1]: {value}")]
    InvalidConfidence { value: f64 },

    #[error("invalid priority: {value}")]
    InvalidPriority { value: String },

    #[error("inconsistent gap for field {field_id}: {reason}")]
    InconsistentGap { field_id: String, reason: String },

    #[error("invalid asset handle: {reason}")]
    InvalidAssetHandle { reason: String },

    #[error("duplicate field in catalog: {field_id}")]
    DuplicateField { field_id: String },

    #[error("catalog parse error: {message}")]
    CatalogParse { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type GapResult<T> = Result<T, GapError>;

impl ErrorCode for GapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfidence { .. } => error_code::INVALID_CONFIDENCE,
            Self::InvalidPriority { .. } => error_code::INVALID_PRIORITY,
            Self::InconsistentGap { .. } => error_code::INCONSISTENT_GAP,
            Self::InvalidAssetHandle { .. } => error_code::INVALID_ASSET_HANDLE,
            Self::DuplicateField { .. } => error_code::DUPLICATE_FIELD,
            Self::CatalogParse { .. } => error_code::CATALOG_PARSE,
            Self::Config { .. } => error_code::CONFIG_ERROR,
            Self::Serialization(_) => error_code::SERIALIZATION,
            Self::Storage(e) => e.error_code(),
        }
    }
}
