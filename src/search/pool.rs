//! Fixed-size pool of filter workers
//!
//! ```text
//! Walker ──submit──▶ [jobs: bounded(N)] ──▶ worker × N ──▶ [results: bounded(N)] ──▶ Collector
//! ```
//!
//! Both queues hold at most N entries, so a walker that outruns the workers
//! blocks in [`WorkerPool::submit`]. Closing the pool is a two-phase barrier:
//! the job queue is closed first, every worker is joined, and only then is
//! the results queue closed.

use super::error::{Result, SearchError};
use super::matcher::{FilterDecision, Matcher};
use super::types::{FileEntry, StatsCollector};
use crossbeam::channel::{bounded, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

pub struct WorkerPool {
    workers: usize,
    matcher: Arc<Matcher>,
    stats: Arc<StatsCollector>,
    job_tx: Option<Sender<FileEntry>>,
    job_rx: Receiver<FileEntry>,
    result_tx: Option<Sender<FileEntry>>,
    result_rx: Receiver<FileEntry>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Create a pool of `workers` filter workers (at least one)
    pub fn new(workers: usize, matcher: Arc<Matcher>, stats: Arc<StatsCollector>) -> Self {
        let workers = workers.max(1);
        let (job_tx, job_rx) = bounded(workers);
        let (result_tx, result_rx) = bounded(workers);

        Self {
            workers,
            matcher,
            stats,
            job_tx: Some(job_tx),
            job_rx,
            result_tx: Some(result_tx),
            result_rx,
            handles: Vec::with_capacity(workers),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Receiving side of the results queue. It disconnects once
    /// [`WorkerPool::close`] has returned.
    pub fn results(&self) -> Receiver<FileEntry> {
        self.result_rx.clone()
    }

    /// Launch every worker thread
    pub fn start(&mut self) -> Result<()> {
        let result_tx = self.result_tx.as_ref().ok_or(SearchError::PoolClosed)?;

        for worker_id in self.handles.len()..self.workers {
            let job_rx = self.job_rx.clone();
            let result_tx = result_tx.clone();
            let matcher = self.matcher.clone();
            let stats = self.stats.clone();
            let name = format!("filesearcher-worker-{}", worker_id);

            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn(move || run_worker(worker_id, job_rx, result_tx, matcher, stats))
                .map_err(|source| SearchError::Spawn { name, source })?;
            self.handles.push(handle);
        }

        tracing::debug!("Started {} filter workers", self.workers);
        Ok(())
    }

    /// Queue an entry for filtering, blocking while the queue is full.
    /// The pool must have been started, otherwise a full queue never drains.
    pub fn submit(&self, entry: FileEntry) -> Result<()> {
        let job_tx = self.job_tx.as_ref().ok_or(SearchError::PoolClosed)?;
        job_tx.send(entry).map_err(|_| SearchError::PoolClosed)
    }

    /// Stop accepting jobs, wait for queued and in-flight jobs to finish,
    /// then close the results queue
    pub fn close(&mut self) -> Result<()> {
        drop(self.job_tx.take());

        let mut panicked = false;
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                panicked = true;
            }
        }

        drop(self.result_tx.take());

        if panicked {
            Err(SearchError::Panicked("worker"))
        } else {
            Ok(())
        }
    }
}

/// Worker loop: exits once the job queue is closed and drained
fn run_worker(
    worker_id: usize,
    job_rx: Receiver<FileEntry>,
    result_tx: Sender<FileEntry>,
    matcher: Arc<Matcher>,
    stats: Arc<StatsCollector>,
) {
    let mut processed = 0usize;

    while let Ok(entry) = job_rx.recv() {
        processed += 1;

        match matcher.decide(&entry) {
            FilterDecision::Process => {
                tracing::trace!("worker-{} matched {}", worker_id, entry.path.display());
                stats.increment_files_matched();
                if result_tx.send(entry).is_err() {
                    break; // Receiver dropped
                }
            }
            FilterDecision::Skip(_) => {}
        }
    }

    tracing::trace!("worker-{} finished after {} jobs", worker_id, processed);
}
