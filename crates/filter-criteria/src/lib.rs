//! Criteria for filtering view files.
//!
//! This crate provides:
//! - Criterion trait shared with list services
//! - StatusCriteria, NameCriteria and AndCriteria implementations
//!
//! ## Example Usage
//! ```ignore
//! use filter_criteria::{AndCriteria, Criterion, NameCriteria, StatusCriteria};
//!
//! let status = Arc::new(StatusCriteria::new());
//! let name = Arc::new(NameCriteria::new());
//! let composed: Arc<dyn Criterion> = Arc::new(AndCriteria::new(status.clone(), name.clone()));
//!
//! // Later changes are visible through `composed`
//! name.set_query("my show");
//! let visible = composed.filter_files(&files);
//! ```

pub mod traits;
pub mod filters;

// Re-export main types
pub use traits::Criterion;
pub use filters::{AndCriteria, NAME_SEPARATOR, NameCriteria, NameQuery, StatusCriteria};
