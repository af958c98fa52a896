//! Single-status equality criterion.

use crate::traits::Criterion;
use parking_lot::RwLock;
use view_files::{ViewFile, ViewFileStatus};

/// Accepts files whose status equals the selected status.
///
/// `None` selects every status.
#[derive(Debug, Default)]
pub struct StatusCriteria {
    status: RwLock<Option<ViewFileStatus>>,
}

impl StatusCriteria {
    /// Create a criterion that accepts every status
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<ViewFileStatus> {
        *self.status.read()
    }

    pub fn set_status(&self, status: Option<ViewFileStatus>) {
        *self.status.write() = status;
    }
}

impl Criterion for StatusCriteria {
    fn name(&self) -> &str {
        "StatusCriteria"
    }

    fn meets_criteria(&self, file: &ViewFile) -> bool {
        match *self.status.read() {
            None => true,
            Some(status) => status == file.status,
        }
    }
}
