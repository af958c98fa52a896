//! Boundary with the service that owns the file list.
//!
//! The engine registers one composed criterion with the list service and
//! later asks it to reapply. The list service answers asynchronously by
//! pushing a fresh population, which the caller feeds into
//! `FilterStateEngine::on_population_changed`.

use filter_criteria::Criterion;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc;
use view_files::{Population, ViewFile};

/// What the engine needs from a list service.
pub trait FileListService {
    /// Register the predicate applied on every (re)filter.
    ///
    /// Called once; the service keeps consulting the same handle.
    fn set_filter_criteria(&self, criteria: Arc<dyn Criterion>);

    /// Re-run the registered predicate. Fire-and-forget.
    fn reapply_filters(&self);
}

impl<L: FileListService + ?Sized> FileListService for Arc<L> {
    fn set_filter_criteria(&self, criteria: Arc<dyn Criterion>) {
        (**self).set_filter_criteria(criteria)
    }

    fn reapply_filters(&self) {
        (**self).reapply_filters()
    }
}

/// Receiving end for populations pushed by `InMemoryFileList`.
pub type PopulationReceiver = mpsc::UnboundedReceiver<Population>;

struct ListState {
    files: Population,
    filtered: Population,
    criteria: Option<Arc<dyn Criterion>>,
}

/// List service holding the files in memory.
///
/// Every `set_files` or `reapply_filters` refilters the visible list and
/// sends the full population down the channel returned from `new`, so
/// facets keep reflecting every file rather than only the visible ones.
pub struct InMemoryFileList {
    state: RwLock<ListState>,
    sender: mpsc::UnboundedSender<Population>,
}

impl InMemoryFileList {
    pub fn new() -> (Self, PopulationReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let empty: Population = Arc::new(Vec::new());
        let list = Self {
            state: RwLock::new(ListState {
                files: empty.clone(),
                filtered: empty,
                criteria: None,
            }),
            sender,
        };
        (list, receiver)
    }

    /// Replace the files and refilter
    pub fn set_files(&self, files: Vec<ViewFile>) {
        self.state.write().files = Arc::new(files);
        self.refilter();
    }

    /// Every file, visible or not
    pub fn files(&self) -> Population {
        self.state.read().files.clone()
    }

    /// Files that passed the registered criterion at the last refilter
    pub fn filtered_files(&self) -> Population {
        self.state.read().filtered.clone()
    }

    fn refilter(&self) {
        let files = {
            let mut guard = self.state.write();
            let state = &mut *guard;
            state.filtered = match &state.criteria {
                Some(criteria) => Arc::new(criteria.filter_files(&state.files)),
                None => state.files.clone(),
            };
            tracing::debug!(
                "Filtered file list (input count: {}, output count: {})",
                state.files.len(),
                state.filtered.len()
            );
            state.files.clone()
        };
        if self.sender.send(files).is_err() {
            tracing::trace!("population receiver dropped, discarding update");
        }
    }
}

impl FileListService for InMemoryFileList {
    fn set_filter_criteria(&self, criteria: Arc<dyn Criterion>) {
        tracing::debug!("Registered filter criteria: {}", criteria.name());
        self.state.write().criteria = Some(criteria);
    }

    fn reapply_filters(&self) {
        self.refilter();
    }
}
