//! Search orchestration
//!
//! ```text
//! ┌────────┐ submit ┌──────────────┐ matches ┌───────────┐
//! │ Walker │──────▶│ WorkerPool×N │───────▶│ Collector │──▶ SearchResult
//! └────────┘        └──────────────┘         └───────────┘
//! ```
//!
//! The driving thread walks the tree and feeds the pool, then waits for
//! traversal, pool shutdown and the collector, in that order. A traversal
//! failure stops submission but already-queued jobs still drain before the
//! error is returned.

use super::collector::Collector;
use super::error::{Result, SearchError};
use super::matcher::Matcher;
use super::pool::WorkerPool;
use super::types::{FilterConfig, SearchOptions, SearchResult, StatsCollector};
use super::walker::Walker;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Runs one search over a directory tree
#[derive(Debug, Clone)]
pub struct Searcher {
    filter: Arc<FilterConfig>,
    options: SearchOptions,
}

impl Searcher {
    pub fn new(filter: FilterConfig, options: SearchOptions) -> Self {
        Self {
            filter: Arc::new(filter),
            options,
        }
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    /// Scan `root` and return every matching file, unsorted
    pub fn search(&self, root: &Path) -> Result<SearchResult> {
        let start_time = Instant::now();
        let stats = Arc::new(StatsCollector::new());
        let workers = self.options.effective_workers();

        tracing::info!("Searching {} with {} workers", root.display(), workers);

        let matcher = Arc::new(Matcher::new(&self.filter));
        let mut pool = WorkerPool::new(workers, matcher, stats.clone());
        pool.start()?;

        let collector = match Collector::spawn(pool.results()) {
            Ok(collector) => collector,
            Err(err) => {
                pool.close()?;
                return Err(err);
            }
        };

        let mut traversal_error: Option<SearchError> = None;
        for entry in Walker::new(root, &self.options).entries(stats.clone()) {
            match entry {
                Ok(entry) if entry.is_dir => {}
                Ok(entry) => {
                    if let Err(err) = pool.submit(entry) {
                        traversal_error = Some(err);
                        break;
                    }
                }
                Err(err) => {
                    traversal_error = Some(err);
                    break;
                }
            }
        }

        pool.close()?;
        let matches = collector.finish()?;

        if let Some(err) = traversal_error {
            tracing::warn!("Search of {} aborted: {}", root.display(), err);
            return Err(err);
        }

        let duration_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
        let stats = stats.snapshot(workers, duration_ms);

        tracing::info!(
            "Search completed in {}ms ({} files, {} matches, {} directories)",
            stats.duration_ms,
            stats.files_discovered,
            matches.len(),
            stats.directories_traversed
        );

        Ok(SearchResult {
            root: root.to_path_buf(),
            matches,
            stats,
        })
    }
}
