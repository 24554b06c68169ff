use std::io;
use std::path::PathBuf;

/// Errors that abort a search
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to determine current directory: {0}")]
    RootResolution(#[source] io::Error),

    #[error("failed to scan directory {}: {source}", root.display())]
    Traversal {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to spawn {name} thread: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("worker pool is not accepting jobs")]
    PoolClosed,

    #[error("a {0} thread panicked")]
    Panicked(&'static str),
}

pub type Result<T> = std::result::Result<T, SearchError>;
