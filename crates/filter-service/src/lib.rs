//! Filter service for the transfer list.
//!
//! This crate contains the engine that keeps displayable filter state in
//! sync with the file population and the current criteria.
//!
//! ## Example Usage
//! ```ignore
//! use filter_service::{FilterStateEngine, InMemoryFileList};
//!
//! let (list, mut populations) = InMemoryFileList::new();
//! let list = Arc::new(list);
//! let mut engine = FilterStateEngine::new(list.clone());
//! engine.snapshots().subscribe(|snapshot| render(snapshot));
//!
//! list.set_files(files);
//! while let Ok(population) = populations.try_recv() {
//!     engine.on_population_changed(population);
//! }
//! engine.filter_status(Some(ViewFileStatus::Queued));
//! ```

pub mod channel;
pub mod engine;
pub mod list_service;
pub mod snapshot;

pub use channel::{SnapshotChannel, Subscription, SubscriptionId};
pub use engine::FilterStateEngine;
pub use list_service::{FileListService, InMemoryFileList, PopulationReceiver};
pub use snapshot::{FilterSnapshot, StatusFacet};
