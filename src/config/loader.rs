use super::formats;
use crate::search::SearchOptions;
use anyhow::{Context, Result};
use figment::{Figment, providers::{Env, Format, Toml}};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const ENV_PREFIX: &str = "FILESEARCHER_";
const PROJECT_CONFIG_STEM: &str = "filesearcher";
const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "json", "yaml", "yml"];

/// When to colour output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => console::colors_enabled(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// The `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub color: ColorChoice,
}

/// Layered configuration: embedded defaults, user and project files, an
/// optional explicit file, then `FILESEARCHER_` environment variables
pub struct SearcherConfig {
    figment: Figment,
}

impl SearcherConfig {
    /// An explicit config file replaces the user and project files
    pub fn load_with_custom_config(custom_config: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            if !custom_path.is_file() {
                anyhow::bail!("Configuration file not found: {}", custom_path.display());
            }
            figment = figment.merge(formats::auto(custom_path));
        } else {
            if let Some(user_dir) = Self::user_config_dir() {
                for ext in CONFIG_EXTENSIONS {
                    figment = figment.merge(formats::auto(user_dir.join(format!("config.{}", ext))));
                }
            }
            for ext in CONFIG_EXTENSIONS {
                figment = figment.merge(formats::auto(format!("{}.{}", PROJECT_CONFIG_STEM, ext)));
            }
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(SearcherConfig { figment })
    }

    /// Build from an already assembled figment
    pub fn from_figment(figment: Figment) -> Self {
        SearcherConfig { figment }
    }

    /// The `[search]` section
    pub fn search_options(&self) -> Result<SearchOptions> {
        self.figment
            .extract_inner("search")
            .context("Invalid [search] configuration")
    }

    /// The `[output]` section
    pub fn output_settings(&self) -> Result<OutputSettings> {
        self.figment
            .extract_inner("output")
            .context("Invalid [output] configuration")
    }

    fn user_config_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("filesearcher"))
    }
}
