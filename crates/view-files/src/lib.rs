//! # View Files Crate
//!
//! Domain model for the files shown in a transfer list.
//!
//! ## Main Components
//!
//! - **types**: `ViewFile`, `ViewFileStatus` and the shared `Population` alias
//! - **parser**: Load a population from a JSON file
//! - **error**: Error types for loading and status parsing

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{PopulationLoadError, Result};
pub use parser::{load_population, parse_population};
pub use types::{Population, ViewFile, ViewFileStatus, selection_label};
