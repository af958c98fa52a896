//! Error types for the view-files crate.
//!
//! The filter core itself never fails; errors only arise at the edges
//! where a population is read from disk or a status is parsed from text.

use thiserror::Error;

/// Errors that can occur while loading a population of view files
#[derive(Error, Debug)]
pub enum PopulationLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Population JSON was malformed
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A status name did not match any known status
    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PopulationLoadError>;
