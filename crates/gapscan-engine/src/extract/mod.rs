//! The eight stateless extractors behind one "try extract field X"
//! capability. Enum dispatch over `SourceKind`, not trait objects; the
//! set of sources is closed and exhaustively matched.

pub mod collector;
pub mod composite;

pub use collector::extract_one;
pub use composite::collect_all;
