//! Depth-first directory traversal
//!
//! Wraps the sequential `ignore` walker and turns its directory entries into
//! [`FileEntry`] values. The root itself is never yielded.
//!
//! Failures below the root (unreadable nested directory, metadata that can't
//! be read) are logged and skipped. A failure at the root ends the iteration
//! with a single [`SearchError::Traversal`].

use super::error::SearchError;
use super::types::{FileEntry, SearchOptions, StatsCollector};
use chrono::{DateTime, Local};
use ignore::{Walk, WalkBuilder};
use std::path::PathBuf;
use std::sync::Arc;

/// Produces every node below a search root
pub struct Walker {
    root: PathBuf,
    options: SearchOptions,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>, options: &SearchOptions) -> Self {
        Self {
            root: root.into(),
            options: options.clone(),
        }
    }

    /// Start a lazy traversal. Counters in `stats` are updated as entries are
    /// produced, so they reflect only what has been consumed so far.
    pub fn entries(&self, stats: Arc<StatsCollector>) -> Entries {
        Entries {
            inner: self.build_walk(),
            root: self.root.clone(),
            stats,
            finished: false,
        }
    }

    fn build_walk(&self) -> Walk {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)               // Visit everything unless configured otherwise
            .hidden(!self.options.hidden)          // `hidden(true)` means skip hidden entries
            .git_ignore(self.options.git_ignore)
            .git_global(self.options.git_ignore)
            .git_exclude(self.options.git_ignore)
            .ignore(self.options.git_ignore)
            .parents(self.options.git_ignore)
            .require_git(false)
            .follow_links(self.options.follow_links)
            .max_depth(self.options.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));   // Stable discovery order
        builder.build()
    }
}

/// Iterator returned by [`Walker::entries`]
pub struct Entries {
    inner: Walk,
    root: PathBuf,
    stats: Arc<StatsCollector>,
    finished: bool,
}

impl Entries {
    fn entry_from(&self, dent: &ignore::DirEntry) -> Option<FileEntry> {
        let metadata = match dent.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::debug!("Skipping {}: {}", dent.path().display(), err);
                return None;
            }
        };

        let modified = match metadata.modified() {
            Ok(modified) => DateTime::<Local>::from(modified),
            Err(err) => {
                tracing::debug!("Skipping {}: {}", dent.path().display(), err);
                return None;
            }
        };

        Some(FileEntry {
            path: dent.path().to_path_buf(),
            name: dent.file_name().to_string_lossy().into_owned(),
            modified,
            is_dir: metadata.is_dir(),
            depth: dent.depth().saturating_sub(1),
        })
    }
}

impl Iterator for Entries {
    type Item = Result<FileEntry, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.inner.next()? {
                Ok(dent) => {
                    if dent.depth() == 0 {
                        continue;
                    }

                    let Some(entry) = self.entry_from(&dent) else {
                        self.stats.increment_entries_skipped();
                        continue;
                    };

                    if entry.is_dir {
                        self.stats.increment_directories_traversed();
                    } else {
                        self.stats.increment_files_discovered();
                    }
                    return Some(Ok(entry));
                }
                Err(err) if is_root_error(&err) => {
                    self.finished = true;
                    return Some(Err(SearchError::Traversal {
                        root: self.root.clone(),
                        source: err,
                    }));
                }
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry: {}", err);
                    self.stats.increment_entries_skipped();
                }
            }
        }
    }
}

/// Errors raised for the root (or with no depth information) abort the walk.
/// Partial errors only mean an ignore file failed to parse.
fn is_root_error(err: &ignore::Error) -> bool {
    !err.is_partial() && err.depth().is_none_or(|depth| depth == 0)
}
