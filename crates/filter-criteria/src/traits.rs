//! Core trait for view file criteria.
//!
//! This module defines the Criterion trait that lets criteria be composed
//! and handed to a list service without it knowing the concrete kinds.

use view_files::ViewFile;

/// A pure predicate over a view file.
///
/// ## Design Note
/// - `Send + Sync` lets a criterion be shared with a list service that
///   evaluates it from its own thread or queue
/// - `meets_criteria` must not have side effects; criteria that can change
///   (status, name) only change through their own setters
pub trait Criterion: Send + Sync {
    /// Returns the name of this criterion (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `file` satisfies this criterion
    fn meets_criteria(&self, file: &ViewFile) -> bool;

    /// Keep the files that satisfy this criterion, preserving order.
    fn filter_files(&self, files: &[ViewFile]) -> Vec<ViewFile> {
        let filtered: Vec<ViewFile> = files
            .iter()
            .filter(|file| self.meets_criteria(file))
            .cloned()
            .collect();
        tracing::trace!(
            "Criterion {} kept {} of {} files",
            self.name(),
            filtered.len(),
            files.len()
        );
        filtered
    }
}
