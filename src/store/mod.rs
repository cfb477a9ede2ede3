//! Snapshot store for the active portfolio dataset.
//!
//! Ingest replaces the whole dataset; it is never mutated in place. Each
//! reader takes an `Arc` snapshot up front, so an analysis observes one
//! consistent dataset for its entire duration even if a replacement lands
//! concurrently.

use crate::core::dataset::Dataset;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Single-writer/multi-reader holder for the current dataset.
pub struct DatasetStore {
    current: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        DatasetStore {
            current: RwLock::new(Arc::new(Dataset::default())),
        }
    }

    /// Atomically swaps in a new dataset. Readers holding an earlier
    /// snapshot keep it until they drop it.
    pub fn replace(&self, dataset: Dataset) {
        debug!(
            customers = dataset.customers().len(),
            "Replacing dataset snapshot"
        );
        let mut current = self.current.write().unwrap();
        *current = Arc::new(dataset);
    }

    /// Returns the current dataset snapshot.
    pub fn snapshot(&self) -> Arc<Dataset> {
        self.current.read().unwrap().clone()
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}
