//! Displayable filter state.

use serde::Serialize;
use view_files::{ViewFile, ViewFileStatus};

/// Enabled/selected flags for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusFacet {
    pub status: ViewFileStatus,
    /// At least one file in the population has this status
    pub enabled: bool,
    /// This status is the current status filter
    pub selected: bool,
}

/// Immutable summary of which status facets are enabled and selected.
///
/// Facets follow `ViewFileStatus::ALL` order. There is no enabled flag for
/// "all"; selecting every status is always available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSnapshot {
    facets: Vec<StatusFacet>,
    all_selected: bool,
}

impl FilterSnapshot {
    /// Derive a snapshot from a population and the selected status.
    ///
    /// ## Algorithm
    /// For each status in `ViewFileStatus::ALL`:
    /// - enabled = any file has that status
    /// - selected = it equals `selected`
    ///
    /// `all_selected` is true iff `selected` is `None`.
    pub fn compute(files: &[ViewFile], selected: Option<ViewFileStatus>) -> Self {
        let facets = ViewFileStatus::ALL
            .into_iter()
            .map(|status| StatusFacet {
                status,
                enabled: files.iter().any(|file| file.status == status),
                selected: selected == Some(status),
            })
            .collect();

        Self {
            facets,
            all_selected: selected.is_none(),
        }
    }

    pub fn facets(&self) -> &[StatusFacet] {
        &self.facets
    }

    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn is_enabled(&self, status: ViewFileStatus) -> bool {
        self.facet(status).is_some_and(|facet| facet.enabled)
    }

    pub fn is_selected(&self, status: ViewFileStatus) -> bool {
        self.facet(status).is_some_and(|facet| facet.selected)
    }

    /// The selected status, or `None` when every status is selected
    pub fn selected_status(&self) -> Option<ViewFileStatus> {
        self.facets
            .iter()
            .find(|facet| facet.selected)
            .map(|facet| facet.status)
    }

    fn facet(&self, status: ViewFileStatus) -> Option<&StatusFacet> {
        self.facets.iter().find(|facet| facet.status == status)
    }
}

/// Everything disabled, "all" selected.
impl Default for FilterSnapshot {
    fn default() -> Self {
        Self::compute(&[], None)
    }
}
