//! Field catalog — the caller-supplied map of fields worth scanning.

use serde::{Deserialize, Serialize};

use super::collections::FxHashMap;
use super::priority::FieldPriority;
use crate::errors::{GapError, GapResult};

/// One catalog entry: what to look for and where custom-attribute
/// extraction may find it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field_id: String,
    pub display_name: String,
    pub priority: FieldPriority,
    pub section: String,
    /// Candidate lookup paths for custom-attribute extraction, in the
    /// fixed order they are tried. Direct keys or dotted nested paths.
    #[serde(default)]
    pub custom_attribute_paths: Vec<String>,
}

/// Ordered field catalog with O(1) lookup by id.
///
/// Declaration order is preserved; it is the order of the returned gap
/// list.
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    fields: Vec<FieldSpec>,
    index: FxHashMap<String, usize>,
}

impl FieldCatalog {
    /// Build a catalog, rejecting duplicate field ids.
    pub fn new(fields: Vec<FieldSpec>) -> GapResult<Self> {
        let mut index = FxHashMap::default();
        for (i, field) in fields.iter().enumerate() {
            if index.insert(field.field_id.clone(), i).is_some() {
                return Err(GapError::DuplicateField {
                    field_id: field.field_id.clone(),
                });
            }
        }
        Ok(Self { fields, index })
    }

    /// Parse a catalog from its TOML representation:
    ///
    /// ```toml
    /// [[fields]]
    /// field_id = "operating_system"
    /// display_name = "Operating System"
    /// priority = "critical"
    /// section = "Infrastructure"
    /// custom_attribute_paths = ["os", "system.os_name"]
    /// ```
    pub fn from_toml_str(raw: &str) -> GapResult<Self> {
        #[derive(Deserialize)]
        struct CatalogFile {
            #[serde(default)]
            fields: Vec<FieldSpec>,
        }
        let parsed: CatalogFile = toml::from_str(raw).map_err(|e| GapError::CatalogParse {
            message: e.to_string(),
        })?;
        Self::new(parsed.fields)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldSpec> {
        self.index.get(field_id).map(|&i| &self.fields[i])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
