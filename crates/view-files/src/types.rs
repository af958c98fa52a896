//! Core domain types for files shown in the transfer list.
//!
//! A `ViewFile` is owned and mutated by whatever service tracks transfers;
//! the filter layer only ever reads `name` and `status`.

use crate::error::PopulationLoadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Status
// =============================================================================

/// Lifecycle state of a file undergoing download/extraction.
///
/// Variant order is presentation order; it has no bearing on matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFileStatus {
    Default,
    Queued,
    Downloading,
    Downloaded,
    Stopped,
    Extracting,
    Extracted,
}

impl ViewFileStatus {
    /// Every status, in presentation order
    pub const ALL: [ViewFileStatus; 7] = [
        ViewFileStatus::Default,
        ViewFileStatus::Queued,
        ViewFileStatus::Downloading,
        ViewFileStatus::Downloaded,
        ViewFileStatus::Stopped,
        ViewFileStatus::Extracting,
        ViewFileStatus::Extracted,
    ];

    /// Lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewFileStatus::Default => "default",
            ViewFileStatus::Queued => "queued",
            ViewFileStatus::Downloading => "downloading",
            ViewFileStatus::Downloaded => "downloaded",
            ViewFileStatus::Stopped => "stopped",
            ViewFileStatus::Extracting => "extracting",
            ViewFileStatus::Extracted => "extracted",
        }
    }
}

/// Label for a status selection, where `None` selects every status
pub fn selection_label(status: Option<ViewFileStatus>) -> &'static str {
    status.map_or("all", |status| status.as_str())
}

impl fmt::Display for ViewFileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewFileStatus {
    type Err = PopulationLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ViewFileStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| PopulationLoadError::InvalidStatus {
                value: s.to_string(),
            })
    }
}

// =============================================================================
// ViewFile
// =============================================================================

/// A file as presented in the transfer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFile {
    pub name: String,
    pub status: ViewFileStatus,
    #[serde(default)]
    pub is_dir: bool,
    /// Bytes present locally, if the file has been seen locally
    #[serde(default)]
    pub local_size: Option<u64>,
    /// Bytes on the remote, if the file has been seen remotely
    #[serde(default)]
    pub remote_size: Option<u64>,
}

impl ViewFile {
    /// Create a plain file with no size information
    pub fn new(name: impl Into<String>, status: ViewFileStatus) -> Self {
        Self {
            name: name.into(),
            status,
            is_dir: false,
            local_size: None,
            remote_size: None,
        }
    }
}

/// Full collection of files known at one point in time.
///
/// Replaced wholesale on every update and never mutated after hand-off.
pub type Population = Arc<Vec<ViewFile>>;
