//! Concurrent file search
//!
//! A walker feeds discovered files into a fixed pool of filter workers; a
//! collector gathers the matches and the presenter orders and renders them.

mod collector;
mod error;
mod matcher;
mod pool;
mod presenter;
mod searcher;
mod types;
mod walker;

// Public API exports
pub use collector::Collector;
pub use error::{Result, SearchError};
pub use matcher::{matches, ExtensionFilter, Filter, FilterDecision, Matcher, RecencyFilter};
pub use pool::WorkerPool;
pub use presenter::{sort_newest_first, Presenter, RelativeAge};
pub use searcher::Searcher;
pub use types::{
    FileEntry, FilterConfig, SearchOptions, SearchResult, SearchStats, StatsCollector,
    DEFAULT_WORKERS,
};
pub use walker::{Entries, Walker};
