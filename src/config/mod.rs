//! Configuration management for filesearcher
//!
//! Settings are merged with figment from embedded defaults, user and project
//! config files (TOML, JSON or YAML) and `FILESEARCHER_` environment
//! variables. Command-line flags are applied on top by the CLI.

mod loader;
mod formats;

pub use loader::{ColorChoice, OutputSettings, SearcherConfig};
