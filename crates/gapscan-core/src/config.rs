//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{GapError, GapResult};

/// Configuration for the gap scanner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScannerConfig {
    /// Worker threads for batch scanning. 0 = rayon default.
    pub parallelism: Option<usize>,
    /// Catalog size at which per-field evaluation fans out across the
    /// worker pool instead of running serially.
    pub parallel_field_threshold: Option<usize>,
    /// Best-source confidence below which callers should still prompt
    /// even though `is_true_gap` is false.
    pub prompt_threshold: Option<f64>,
    /// Reader connections in the storage pool.
    pub read_pool_size: Option<usize>,
}

impl ScannerConfig {
    /// Effective worker count, defaulting to 0 (rayon decides).
    pub fn effective_parallelism(&self) -> usize {
        self.parallelism.unwrap_or(0)
    }

    /// Effective fan-out threshold, defaulting to 16 fields.
    pub fn effective_parallel_field_threshold(&self) -> usize {
        self.parallel_field_threshold.unwrap_or(16)
    }

    /// Effective prompt threshold, defaulting to 0.8.
    pub fn effective_prompt_threshold(&self) -> f64 {
        self.prompt_threshold.unwrap_or(0.8)
    }

    /// Effective reader pool size, defaulting to 2.
    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(2)
    }

    pub fn from_toml_str(raw: &str) -> GapResult<Self> {
        toml::from_str(raw).map_err(|e| GapError::Config {
            message: e.to_string(),
        })
    }
}
