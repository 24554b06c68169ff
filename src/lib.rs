//! # filesearcher - concurrent recursive file search
//!
//! Walks a directory tree, filters files by extension and modification time
//! on a fixed pool of worker threads, and lists the matches newest first.
//!
//! ## Pipeline
//!
//! ```text
//! Walker ──▶ WorkerPool (N × Matcher) ──▶ Collector ──▶ Presenter
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use filesearcher::search::{FilterConfig, Presenter, SearchOptions, Searcher};
//! use std::path::Path;
//!
//! // Markdown files touched in the last week, highlighting "notes"
//! let filter = FilterConfig::new("md", "notes", 7);
//! let searcher = Searcher::new(filter, SearchOptions::default());
//!
//! let mut result = searcher.search(Path::new("docs/"))?;
//! let presenter = Presenter::new(searcher.filter(), false);
//! for line in presenter.render(&result.root, &mut result.matches) {
//!     println!("{}", line);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod search;

pub use cli::{Cli, Output};
pub use config::SearcherConfig;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
