//! Configuration for the course manager.
//!
//! Settings come from up to two optional YAML files, merged field by field:
//! 1. Global config (`~/.config/course-manager/config.yaml`)
//! 2. Project config (`./course-manager.yaml`, or the path given with `--config`)
//!
//! Command-line flags are applied on top with [`Config::apply`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::OutputMode;

pub mod defaults;
pub mod validation;

pub use defaults::*;
pub use validation::*;

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "course-manager.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// YAML file of courses loaded into the store at start-up
    #[serde(default)]
    pub seed: Option<String>,
}

/// Values from the command line that take precedence over every file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputMode>,
    pub no_color: bool,
    pub seed: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with full merge semantics.
    ///
    /// With `explicit` set, that file replaces the project config and must
    /// exist. Otherwise a missing project config simply means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::load_merged_from(global_config_path().as_deref(), Some(path))
            }
            None => Self::load_merged_from(
                global_config_path().as_deref(),
                Some(Path::new(PROJECT_CONFIG_FILE)),
            ),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse config")?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration from specified global and project paths.
    /// Files that do not exist are skipped; project values override global ones.
    pub fn load_merged_from(
        global_path: Option<&Path>,
        project_path: Option<&Path>,
    ) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = project_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn apply(&mut self, overrides: Overrides) -> Result<()> {
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.no_color {
            self.output.color = false;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self.validate()
    }

    /// Seed file path with a leading `~` expanded.
    pub fn seed_path(&self) -> Option<PathBuf> {
        self.seed
            .as_deref()
            .map(|raw| PathBuf::from(shellexpand::tilde(raw).as_ref()))
    }

    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

/// Returns the path to the global config file at ~/.config/course-manager/config.yaml
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .map(|home| home.join(".config/course-manager/config.yaml"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub output: Option<PartialOutputConfig>,
    pub logging: Option<PartialLoggingConfig>,
    pub seed: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputMode>,
    pub color: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialLoggingConfig {
    pub level: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_output = self.output.unwrap_or_default();
        let global_logging = self.logging.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();
        let project_logging = project.logging.unwrap_or_default();

        Config {
            output: OutputConfig {
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
                color: project_output
                    .color
                    .or(global_output.color)
                    .unwrap_or_else(defaults::default_true),
            },
            logging: LoggingConfig {
                level: project_logging
                    .level
                    .or(global_logging.level)
                    .unwrap_or_else(defaults::default_log_level),
            },
            seed: project.seed.or(self.seed),
        }
    }
}
