//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <path>`, else `$XDG_CONFIG_HOME/treescan/treescan.toml`
//! 3. Environment variables: `TREESCAN_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::random::{DEFAULT_MEAN, DEFAULT_STD_DEV};
use crate::sample::Labels;

pub const ENV_PREFIX: &str = "TREESCAN";

/// How trees are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<path> <name> == <value>` line per leaf
    #[default]
    Lines,
    /// Box-drawing tree
    Tree,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Lines => "lines",
            OutputFormat::Tree => "tree",
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("config error: {0}")]
    Invalid(#[from] config::ConfigError),

    #[error("cannot render settings: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Unified configuration for treescan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Mean of the normal distribution leaves are drawn from
    pub mean: f64,
    /// Standard deviation of that distribution
    pub std_dev: f64,
    /// Fixed RNG seed; OS entropy when unset
    pub seed: Option<u64>,
    /// Output format
    pub format: OutputFormat,
    /// Print prefix of the receiving instance
    pub lhs_label: String,
    /// Print prefix of the merged-in instance
    pub rhs_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        let labels = Labels::default();
        Self {
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
            seed: None,
            format: OutputFormat::default(),
            lhs_label: labels.lhs,
            rhs_label: labels.rhs,
        }
    }
}

/// Get the XDG config directory for treescan.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treescan").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treescan.toml"))
}

impl Settings {
    pub fn labels(&self) -> Labels {
        Labels {
            lhs: self.lhs_label.clone(),
            rhs: self.rhs_label.clone(),
        }
    }

    /// Effective settings as a TOML document, loadable with `--config`.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }

    /// Load settings with layered precedence, reading `TREESCAN_*` from the process environment.
    ///
    /// An explicit `config_file` must exist; the global file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(config_file, None)
    }

    /// Like [`Settings::load`], but with an explicit environment map (`None` uses the process environment).
    #[instrument(level = "debug", skip(env))]
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("mean", defaults.mean)?
            .set_default("std_dev", defaults.std_dev)?
            .set_default("format", defaults.format.as_str())?
            .set_default("lhs_label", defaults.lhs_label.clone())?
            .set_default("rhs_label", defaults.rhs_label.clone())?;

        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(SettingsError::NotFound(path.to_path_buf()));
                }
                debug!("config file: {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!("global config: {}", global_path.display());
                        builder = builder.add_source(File::from(global_path).required(false));
                    }
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build()?;
        let settings: Self = config.try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }
}
