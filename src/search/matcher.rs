//! Entry filters
//!
//! Every filter is a pure function of a [`FileEntry`] and the immutable
//! [`FilterConfig`], so a single [`Matcher`] can be shared by any number of
//! workers without synchronisation.
//!
//! The keyword is not a filter. It only drives highlighting in the presenter.

use super::types::{FileEntry, FilterConfig};
use chrono::{DateTime, Days, Local};

/// Decision for whether to keep or drop an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Keep the entry
    Process,
    /// Drop the entry with a reason
    Skip(&'static str),
}

/// Common trait for all entry filters
pub trait Filter {
    /// Apply the filter to an entry
    fn filter(&self, entry: &FileEntry) -> FilterDecision;

    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;
}

/// Keeps entries whose extension equals the configured one, ignoring case
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extension: String,
}

impl ExtensionFilter {
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.to_lowercase(),
        }
    }
}

impl Filter for ExtensionFilter {
    fn filter(&self, entry: &FileEntry) -> FilterDecision {
        match entry.extension() {
            Some(ext) if ext.to_lowercase() == self.extension => FilterDecision::Process,
            Some(_) => FilterDecision::Skip("extension mismatch"),
            None => FilterDecision::Skip("no extension"),
        }
    }

    fn name(&self) -> &'static str {
        "ExtensionFilter"
    }
}

/// Drops entries modified strictly before a cutoff
#[derive(Debug, Clone)]
pub struct RecencyFilter {
    /// None when `now - days` falls outside the representable range
    cutoff: Option<DateTime<Local>>,
}

impl RecencyFilter {
    /// Cutoff is `days` calendar days before `now`, so a window that spans a
    /// daylight-saving change keeps the same wall-clock time
    pub fn new(days: u32, now: DateTime<Local>) -> Self {
        Self {
            cutoff: now.checked_sub_days(Days::new(u64::from(days))),
        }
    }

    pub fn cutoff(&self) -> Option<DateTime<Local>> {
        self.cutoff
    }
}

impl Filter for RecencyFilter {
    fn filter(&self, entry: &FileEntry) -> FilterDecision {
        match self.cutoff {
            Some(cutoff) if entry.modified < cutoff => FilterDecision::Skip("outside recency window"),
            _ => FilterDecision::Process,
        }
    }

    fn name(&self) -> &'static str {
        "RecencyFilter"
    }
}

/// Combined predicate applied by the worker pool
#[derive(Debug, Clone)]
pub struct Matcher {
    extension: Option<ExtensionFilter>,
    recency: Option<RecencyFilter>,
}

impl Matcher {
    /// Build a matcher whose recency cutoff is anchored at the current time
    pub fn new(config: &FilterConfig) -> Self {
        Self::at(config, Local::now())
    }

    /// Build a matcher whose recency cutoff is anchored at `now`
    pub fn at(config: &FilterConfig, now: DateTime<Local>) -> Self {
        Self {
            extension: config.extension().map(ExtensionFilter::new),
            recency: config.recency_days().map(|days| RecencyFilter::new(days, now)),
        }
    }

    /// Run every active filter; the first skip wins
    pub fn decide(&self, entry: &FileEntry) -> FilterDecision {
        if entry.is_dir {
            return FilterDecision::Skip("directory");
        }

        let filters = [
            self.extension.as_ref().map(|f| f as &dyn Filter),
            self.recency.as_ref().map(|f| f as &dyn Filter),
        ];

        for filter in filters.into_iter().flatten() {
            if let FilterDecision::Skip(reason) = filter.filter(entry) {
                tracing::trace!("{} skipped {}: {}", filter.name(), entry.path.display(), reason);
                return FilterDecision::Skip(reason);
            }
        }

        FilterDecision::Process
    }

    pub fn matches(&self, entry: &FileEntry) -> bool {
        self.decide(entry) == FilterDecision::Process
    }
}

/// Decide whether `entry` passes `config`, evaluated against the current time
pub fn matches(entry: &FileEntry, config: &FilterConfig) -> bool {
    Matcher::new(config).matches(entry)
}
