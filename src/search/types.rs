//! Data types shared across the search pipeline

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of filter workers when nothing else is configured
pub const DEFAULT_WORKERS: usize = 10;

/// One filesystem node discovered during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub modified: DateTime<Local>,
    pub is_dir: bool,
    /// Distance from the search root (0 = direct child)
    pub depth: usize,
}

impl FileEntry {
    /// Suffix after the last `.` in the file name, if there is one.
    ///
    /// Dotfiles count as having an extension (`.bashrc` -> `bashrc`), matching
    /// how most shells and file managers treat a bare suffix.
    pub fn extension(&self) -> Option<&str> {
        self.name.rfind('.').map(|dot| &self.name[dot + 1..])
    }
}

/// Filter settings for a single search. Built once before the scan starts and
/// shared read-only by the walker, workers and presenter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    extension: Option<String>,
    keyword: Option<String>,
    recency_days: Option<u32>,
}

impl FilterConfig {
    /// Build a filter configuration from raw user input.
    ///
    /// * `extension` - leading dots are stripped, empty disables the filter
    /// * `keyword` - highlight only, empty disables highlighting
    /// * `recency_days` - values <= 0 disable the recency window
    pub fn new(extension: &str, keyword: &str, recency_days: i64) -> Self {
        let extension = extension.trim_start_matches('.');

        Self {
            extension: (!extension.is_empty()).then(|| extension.to_lowercase()),
            keyword: (!keyword.is_empty()).then(|| keyword.to_lowercase()),
            recency_days: u32::try_from(recency_days).ok().filter(|days| *days > 0),
        }
    }

    /// Lowercased extension filter, without the leading dot
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Lowercased highlight keyword
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn recency_days(&self) -> Option<u32> {
        self.recency_days
    }

    /// Case-insensitive substring test against the highlight keyword.
    /// Returns false when no keyword is configured.
    pub fn keyword_matches(&self, name: &str) -> bool {
        self.keyword
            .as_deref()
            .is_some_and(|keyword| name.to_lowercase().contains(keyword))
    }
}

/// Traversal and concurrency options, loaded from the `[search]` config section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Filter worker count (0 = one per CPU core)
    pub workers: usize,
    /// Include hidden files and directories
    pub hidden: bool,
    /// Honour .gitignore / .ignore files
    pub git_ignore: bool,
    pub follow_links: bool,
    /// Directory levels to descend (1 = direct children only), None = unlimited
    pub max_depth: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            hidden: true,
            git_ignore: false,
            follow_links: false,
            max_depth: None,
        }
    }
}

impl SearchOptions {
    /// Resolve the configured worker count into an actual pool size
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }
}

/// Statistics from a search run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub directories_traversed: usize,
    pub files_discovered: usize,
    pub entries_skipped: usize,
    pub files_matched: usize,
    pub workers: usize,
    pub duration_ms: u64,
}

/// Thread-safe counters updated by the walker and the filter workers
#[derive(Debug, Default)]
pub struct StatsCollector {
    directories_traversed: AtomicUsize,
    files_discovered: AtomicUsize,
    entries_skipped: AtomicUsize,
    files_matched: AtomicUsize,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_directories_traversed(&self) {
        self.directories_traversed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_files_discovered(&self) {
        self.files_discovered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_entries_skipped(&self) {
        self.entries_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_files_matched(&self) {
        self.files_matched.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of the counters
    pub fn snapshot(&self, workers: usize, duration_ms: u64) -> SearchStats {
        SearchStats {
            directories_traversed: self.directories_traversed.load(Ordering::Relaxed),
            files_discovered: self.files_discovered.load(Ordering::Relaxed),
            entries_skipped: self.entries_skipped.load(Ordering::Relaxed),
            files_matched: self.files_matched.load(Ordering::Relaxed),
            workers,
            duration_ms,
        }
    }
}

/// Outcome of a completed search, matches in arrival (unsorted) order
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub root: PathBuf,
    pub matches: Vec<FileEntry>,
    pub stats: SearchStats,
}
