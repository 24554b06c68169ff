//! Single-consumer drain of the worker pool's results queue

use super::error::{Result, SearchError};
use super::types::FileEntry;
use crossbeam::channel::Receiver;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

/// Accumulates matched entries on a dedicated thread.
///
/// Entries are stored in arrival order, which is not discovery order.
pub struct Collector {
    results: Arc<Mutex<Vec<FileEntry>>>,
    handle: JoinHandle<()>,
}

impl Collector {
    /// Start draining `results_rx` until every sender is gone
    pub fn spawn(results_rx: Receiver<FileEntry>) -> Result<Self> {
        let results = Arc::new(Mutex::new(Vec::new()));
        let sink = results.clone();
        let name = "filesearcher-collector".to_string();

        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                for entry in results_rx.iter() {
                    sink.lock().unwrap_or_else(PoisonError::into_inner).push(entry);
                }
            })
            .map_err(|source| SearchError::Spawn { name, source })?;

        Ok(Self { results, handle })
    }

    /// Wait for the results queue to close and hand back everything collected
    pub fn finish(self) -> Result<Vec<FileEntry>> {
        self.handle
            .join()
            .map_err(|_| SearchError::Panicked("collector"))?;

        let results = Arc::try_unwrap(self.results)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .unwrap_or_else(|arc| arc.lock().unwrap_or_else(PoisonError::into_inner).clone());

        tracing::debug!("Collected {} matching entries", results.len());
        Ok(results)
    }
}
