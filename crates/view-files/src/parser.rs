//! Loader for population files.
//!
//! A population file is a JSON array of view files:
//!
//! ```json
//! [
//!   { "name": "My.Show.S01E01", "status": "downloading", "remote_size": 1024 },
//!   { "name": "archive.rar", "status": "extracted", "is_dir": false }
//! ]
//! ```

use crate::error::{PopulationLoadError, Result};
use crate::types::{Population, ViewFile};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Parse a population from JSON text
pub fn parse_population(content: &str) -> Result<Population> {
    let files: Vec<ViewFile> = serde_json::from_str(content)?;
    Ok(Arc::new(files))
}

/// Read and parse a population file
pub fn load_population(path: &Path) -> Result<Population> {
    if !path.exists() {
        return Err(PopulationLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_population(&content)
}
