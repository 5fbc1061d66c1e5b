//! Shared collection type aliases.

pub use rustc_hash::{FxHashMap, FxHashSet};
