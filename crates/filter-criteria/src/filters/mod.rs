//! Criterion implementations.
//!
//! Composition is fixed to conjunction: `AndCriteria` joins two criteria,
//! and the engine joins one `StatusCriteria` with one `NameCriteria`.

pub mod and_criteria;
pub mod name_criteria;
pub mod status_criteria;

// Re-export for convenience
pub use and_criteria::AndCriteria;
pub use name_criteria::{NAME_SEPARATOR, NameCriteria, NameQuery};
pub use status_criteria::StatusCriteria;
