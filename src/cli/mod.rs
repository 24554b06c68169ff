//! Command-line interface for filesearcher
//!
//! Parses flags with clap, layers them over the loaded configuration, runs
//! the search on tokio's blocking pool and prints the rendered listing.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod output;

pub use output::Output;

use crate::config::{ColorChoice, SearcherConfig};
use crate::search::{FilterConfig, Presenter, SearchError, SearchOptions, SearchResult, Searcher};

/// Recursively find files by extension, keyword and modification time,
/// newest first
#[derive(Parser, Debug)]
#[command(
    name = "filesearcher",
    version = crate::VERSION,
    about = "Recursively find files by extension, keyword and recency, newest first",
    long_about = "Walks a directory tree with a pool of filter workers and lists matching \
                  files sorted by modification time. The keyword only highlights names; \
                  it never filters results."
)]
pub struct Cli {
    /// Directory to search when --input is not given (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// File extension to match, e.g. mp4, txt, md
    #[arg(short = 's', long = "subname", value_name = "EXT")]
    pub subname: Option<String>,

    /// Keyword to highlight in file names (case-insensitive)
    #[arg(short, long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// Only include files modified within the last N days (0 = no limit)
    #[arg(short = 'd', long = "date", value_name = "DAYS", default_value_t = 0, allow_negative_numbers = true)]
    pub date: i64,

    /// Directory to search
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging and statistics
    #[arg(short, long)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of filter workers (0 = one per CPU core)
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// When to colour highlighted names
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Honour .gitignore and .ignore files
    #[arg(long)]
    pub git_ignore: bool,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_links: bool,

    /// Directory levels to descend (1 = direct children only)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print search statistics after the listing
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let config = SearcherConfig::load_with_custom_config(self.config.as_deref())?;
        let options = self.apply_overrides(config.search_options()?);
        let color = self
            .color
            .unwrap_or(config.output_settings()?.color)
            .enabled();

        let filter = FilterConfig::new(
            self.subname.as_deref().unwrap_or(""),
            self.keyword.as_deref().unwrap_or(""),
            self.date,
        );
        let root = resolve_root(self.input.clone(), self.directory.clone())?;
        let output = Output::new(self.verbose > 0, self.quiet);

        output.verbose(&format!("Searching {} ({:?})", root.display(), filter));

        let searcher = Searcher::new(filter, options);
        let task_searcher = searcher.clone();
        let task_root = root.clone();
        let mut result = tokio::task::spawn_blocking(move || task_searcher.search(&task_root))
            .await
            .context("Search task failed")??;

        let presenter = Presenter::new(searcher.filter(), color);
        for line in presenter.render(&result.root, &mut result.matches) {
            output.line(&line);
        }

        if self.stats {
            print_stats(&output, &result);
        }

        Ok(())
    }

    /// Command-line flags win over configuration files
    fn apply_overrides(&self, mut options: SearchOptions) -> SearchOptions {
        if let Some(workers) = self.workers {
            options.workers = workers;
        }
        if self.git_ignore {
            options.git_ignore = true;
        }
        if self.follow_links {
            options.follow_links = true;
        }
        if self.max_depth.is_some() {
            options.max_depth = self.max_depth;
        }
        options
    }
}

/// Pick the search root: `--input`, then the positional directory, then the
/// current working directory
pub fn resolve_root(input: Option<PathBuf>, positional: Option<PathBuf>) -> Result<PathBuf, SearchError> {
    match input.or(positional) {
        Some(root) => Ok(root),
        None => std::env::current_dir().map_err(SearchError::RootResolution),
    }
}

/// Shown when the binary is started without any arguments
pub fn print_banner() {
    println!("--- File Searcher v{} ---", crate::VERSION);
    println!("Usage: filesearcher [OPTIONS] [DIRECTORY]");
    println!("Run 'filesearcher --help' for all options");
}

fn print_stats(output: &Output, result: &SearchResult) {
    let stats = &result.stats;
    output.section_header("Search Statistics");
    output.summary_stats("Directories traversed", stats.directories_traversed);
    output.summary_stats("Files discovered", stats.files_discovered);
    output.summary_stats("Files matched", stats.files_matched);
    output.summary_stats("Entries skipped", stats.entries_skipped);
    output.summary_stats("Workers", stats.workers);
    output.summary_stats("Elapsed (ms)", stats.duration_ms);
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Filter directives for a `-v` count; the walker's dependencies stay at warn
fn log_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("{},ignore=warn,globset=warn", level)
}
