//! # Filter State Engine
//!
//! Owns the status and name criteria, registers their conjunction with a
//! list service, and publishes a `FilterSnapshot` whenever the population
//! or the status selection changes:
//! 1. A population arrives: store it, recompute, publish
//! 2. A status filter is set: validate, update, recompute, publish, reapply
//! 3. A name filter is set: update, reapply (the new population triggers 1)
//!
//! Invalid or redundant requests are ignored without an error.

use std::sync::Arc;

use filter_criteria::{AndCriteria, Criterion, NameCriteria, NameQuery, StatusCriteria};
use tracing::{debug, trace};
use view_files::{Population, ViewFileStatus, selection_label};

use crate::channel::SnapshotChannel;
use crate::list_service::FileListService;
use crate::snapshot::FilterSnapshot;

/// Maintains displayable filter state for a file list.
pub struct FilterStateEngine<L: FileListService> {
    list_service: L,
    status_filter: Arc<StatusCriteria>,
    name_filter: Arc<NameCriteria>,
    population: Population,
    snapshots: SnapshotChannel<FilterSnapshot>,
}

impl<L: FileListService> FilterStateEngine<L> {
    /// Create an engine and register its composed criterion with
    /// `list_service`.
    ///
    /// Until the first population arrives the engine sees no files and
    /// publishes the default snapshot.
    pub fn new(list_service: L) -> Self {
        let status_filter = Arc::new(StatusCriteria::new());
        let name_filter = Arc::new(NameCriteria::new());

        let composed: Arc<dyn Criterion> = Arc::new(AndCriteria::new(
            status_filter.clone(),
            name_filter.clone(),
        ));
        list_service.set_filter_criteria(composed);

        Self {
            list_service,
            status_filter,
            name_filter,
            population: Arc::new(Vec::new()),
            snapshots: SnapshotChannel::new(FilterSnapshot::default()),
        }
    }

    /// Filter by status, or `None` for all statuses.
    ///
    /// Selecting a status no current file has is ignored: the presentation
    /// layer cannot always disable that action, so it is accepted and
    /// dropped here.
    pub fn filter_status(&mut self, status: Option<ViewFileStatus>) {
        if self.status_filter.status() == status {
            trace!("Status filter unchanged: {}", selection_label(status));
            return;
        }

        if !self.is_status_enabled(status) {
            trace!("Ignoring status filter with no files: {}", selection_label(status));
            return;
        }

        debug!("Setting status filter: {}", selection_label(status));
        self.status_filter.set_status(status);
        // Reapplying will deliver a new population and recompute again;
        // publishing now keeps the facets responsive in the meantime.
        self.update_state();
        self.list_service.reapply_filters();
    }

    /// Filter by name.
    ///
    /// Queries that normalize to the current one are no-ops. Facets do not
    /// depend on the name, so nothing is published until the list service
    /// delivers the reapplied population.
    pub fn filter_name(&mut self, name: &str) {
        if !self.name_filter.set_query(name) {
            trace!("Name filter unchanged: {:?}", name);
            return;
        }

        debug!("Setting name filter: {:?}", self.name_filter.query().as_str());
        self.list_service.reapply_filters();
    }

    /// Replace the population with a fresh one from the list service.
    pub fn on_population_changed(&mut self, files: Population) {
        self.population = files;
        self.update_state();
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> FilterSnapshot {
        self.snapshots.current()
    }

    /// Channel carrying every published snapshot
    pub fn snapshots(&self) -> &SnapshotChannel<FilterSnapshot> {
        &self.snapshots
    }

    pub fn status_filter(&self) -> Option<ViewFileStatus> {
        self.status_filter.status()
    }

    pub fn name_filter(&self) -> NameQuery {
        self.name_filter.query()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn list_service(&self) -> &L {
        &self.list_service
    }

    fn is_status_enabled(&self, status: Option<ViewFileStatus>) -> bool {
        match status {
            None => true,
            Some(status) => self.population.iter().any(|file| file.status == status),
        }
    }

    fn update_state(&self) {
        let snapshot = FilterSnapshot::compute(&self.population, self.status_filter.status());
        debug!(?snapshot, "Updated filter");
        self.snapshots.publish(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use view_files::ViewFile;

    /// List service that records calls instead of filtering.
    #[derive(Default)]
    struct ProbeList {
        criteria: Mutex<Option<Arc<dyn Criterion>>>,
        reapply_count: Mutex<usize>,
    }

    impl FileListService for ProbeList {
        fn set_filter_criteria(&self, criteria: Arc<dyn Criterion>) {
            *self.criteria.lock() = Some(criteria);
        }

        fn reapply_filters(&self) {
            *self.reapply_count.lock() += 1;
        }
    }

    fn population(statuses: &[ViewFileStatus]) -> Population {
        Arc::new(
            statuses
                .iter()
                .enumerate()
                .map(|(i, status)| ViewFile::new(format!("file{i}"), *status))
                .collect(),
        )
    }

    fn engine_with(statuses: &[ViewFileStatus]) -> (FilterStateEngine<Arc<ProbeList>>, Arc<ProbeList>) {
        let probe = Arc::new(ProbeList::default());
        let mut engine = FilterStateEngine::new(probe.clone());
        engine.on_population_changed(population(statuses));
        (engine, probe)
    }

    fn publish_counter(engine: &FilterStateEngine<Arc<ProbeList>>) -> Arc<Mutex<usize>> {
        let count = Arc::new(Mutex::new(0));
        let clone = count.clone();
        engine.snapshots().subscribe(move |_| *clone.lock() += 1);
        // Discount the replay of the current value
        *count.lock() = 0;
        count
    }

    #[test]
    fn test_new_registers_criteria_and_publishes_default() {
        let probe = Arc::new(ProbeList::default());
        let engine = FilterStateEngine::new(probe.clone());

        assert!(probe.criteria.lock().is_some());
        assert_eq!(*probe.reapply_count.lock(), 0);
        assert_eq!(engine.snapshot(), FilterSnapshot::default());
        assert_eq!(engine.status_filter(), None);
        assert!(engine.name_filter().is_empty());
    }

    #[test]
    fn test_filter_status_accepted() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Queued, ViewFileStatus::Downloaded]);
        let count = publish_counter(&engine);

        engine.filter_status(Some(ViewFileStatus::Queued));

        let snapshot = engine.snapshot();
        assert!(snapshot.is_selected(ViewFileStatus::Queued));
        assert!(!snapshot.all_selected());
        assert!(snapshot.is_enabled(ViewFileStatus::Queued));
        assert!(snapshot.is_enabled(ViewFileStatus::Downloaded));
        assert!(!snapshot.is_enabled(ViewFileStatus::Extracted));
        assert_eq!(*count.lock(), 1);
        assert_eq!(*probe.reapply_count.lock(), 1);
    }

    #[test]
    fn test_filter_status_absent_is_rejected() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Queued, ViewFileStatus::Downloaded]);
        let before = engine.snapshot();
        let count = publish_counter(&engine);

        engine.filter_status(Some(ViewFileStatus::Extracted));

        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.status_filter(), None);
        assert_eq!(*count.lock(), 0);
        assert_eq!(*probe.reapply_count.lock(), 0);
    }

    #[test]
    fn test_filter_status_absent_keeps_previous_selection() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Queued, ViewFileStatus::Downloaded]);
        engine.filter_status(Some(ViewFileStatus::Queued));
        let before = engine.snapshot();
        let count = publish_counter(&engine);

        engine.filter_status(Some(ViewFileStatus::Extracted));

        assert_eq!(engine.status_filter(), Some(ViewFileStatus::Queued));
        assert_eq!(engine.snapshot(), before);
        assert!(engine.snapshot().is_selected(ViewFileStatus::Queued));
        assert!(!engine.snapshot().is_selected(ViewFileStatus::Extracted));
        assert_eq!(*count.lock(), 0);
        assert_eq!(*probe.reapply_count.lock(), 1);
    }

    #[test]
    fn test_filter_all_when_already_all_is_noop() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Queued]);
        let count = publish_counter(&engine);

        engine.filter_status(None);

        assert_eq!(engine.status_filter(), None);
        assert!(engine.snapshot().all_selected());
        assert_eq!(*count.lock(), 0);
        assert_eq!(*probe.reapply_count.lock(), 0);
    }

    #[test]
    fn test_filter_status_same_value_is_noop() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Stopped]);
        engine.filter_status(Some(ViewFileStatus::Stopped));
        let count = publish_counter(&engine);

        engine.filter_status(Some(ViewFileStatus::Stopped));

        assert_eq!(*count.lock(), 0);
        assert_eq!(*probe.reapply_count.lock(), 1);
    }

    #[test]
    fn test_filter_all_is_always_available() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Stopped]);
        engine.filter_status(Some(ViewFileStatus::Stopped));
        engine.on_population_changed(Arc::new(Vec::new()));

        engine.filter_status(None);

        assert!(engine.snapshot().all_selected());
        assert_eq!(*probe.reapply_count.lock(), 2);
    }

    #[test]
    fn test_filter_name_reapplies_without_publishing() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Queued]);
        let count = publish_counter(&engine);

        engine.filter_name("My File");
        assert_eq!(*probe.reapply_count.lock(), 1);
        assert_eq!(*count.lock(), 0);

        engine.filter_name("MY FILE");
        engine.filter_name("my file");
        assert_eq!(*probe.reapply_count.lock(), 1);
        assert_eq!(engine.name_filter().as_str(), "my file");

        engine.filter_name("my file ");
        assert_eq!(*probe.reapply_count.lock(), 2);
        assert_eq!(*count.lock(), 0);
    }

    #[test]
    fn test_whitespace_name_equals_empty() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Queued]);

        engine.filter_name("  ");
        assert_eq!(*probe.reapply_count.lock(), 0);

        let criteria = probe.criteria.lock().clone().unwrap();
        assert!(criteria.meets_criteria(&ViewFile::new("anything", ViewFileStatus::Queued)));
    }

    #[test]
    fn test_registered_criteria_tracks_mutation() {
        let (mut engine, probe) = engine_with(&[ViewFileStatus::Queued, ViewFileStatus::Downloaded]);
        let criteria = probe.criteria.lock().clone().unwrap();

        engine.filter_status(Some(ViewFileStatus::Queued));
        engine.filter_name("show");

        assert!(criteria.meets_criteria(&ViewFile::new("The.Show", ViewFileStatus::Queued)));
        assert!(!criteria.meets_criteria(&ViewFile::new("The.Show", ViewFileStatus::Downloaded)));
        assert!(!criteria.meets_criteria(&ViewFile::new("Movie", ViewFileStatus::Queued)));
    }

    #[test]
    fn test_empty_population_disables_everything() {
        let (mut engine, _probe) = engine_with(&[ViewFileStatus::Queued]);

        engine.on_population_changed(Arc::new(Vec::new()));

        let snapshot = engine.snapshot();
        assert!(snapshot.facets().iter().all(|facet| !facet.enabled));
        assert!(snapshot.all_selected());
    }

    #[test]
    fn test_empty_population_keeps_selection() {
        let (mut engine, _probe) = engine_with(&[ViewFileStatus::Queued]);
        engine.filter_status(Some(ViewFileStatus::Queued));

        engine.on_population_changed(Arc::new(Vec::new()));

        let snapshot = engine.snapshot();
        assert!(!snapshot.all_selected());
        assert!(snapshot.is_selected(ViewFileStatus::Queued));
        assert!(!snapshot.is_enabled(ViewFileStatus::Queued));
    }

    #[test]
    fn test_every_present_status_can_be_selected() {
        for status in ViewFileStatus::ALL {
            let (mut engine, _probe) = engine_with(&[status, ViewFileStatus::Default]);
            engine.filter_status(Some(status));

            let snapshot = engine.snapshot();
            assert!(snapshot.is_selected(status), "{status}");
            assert!(snapshot.is_enabled(status), "{status}");
            assert!(!snapshot.all_selected(), "{status}");
        }
    }
}
