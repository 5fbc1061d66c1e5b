//! # gapscan-core
//!
//! Foundation crate for the Gapscan intelligent-gap engine.
//! Defines the value objects, traits, errors, config, and events shared by
//! every other crate in the workspace.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ScannerConfig;
pub use errors::{ErrorCode, GapError, GapResult, StorageError};
pub use traits::{AssetReader, AssetSnapshot, ContextLoader};
pub use types::catalog::{FieldCatalog, FieldSpec};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::context::{
    AssetContext, EnrichmentCategory, EnrichmentRecord, LinkedApplication, RelatedAssetRecord,
    TenantScope,
};
pub use types::gap::IntelligentGap;
pub use types::priority::FieldPriority;
pub use types::source::{DataSource, SourceKind};
