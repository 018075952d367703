use crate::case::ConvertOptions;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Separator for the upper-break and lower-break styles
    pub join: Option<String>,

    /// Uppercase snake and kebab output
    pub caps: bool,

    pub format: OutputFormat,

    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            join: None,
            caps: false,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        join: Option<String>,
        caps: bool,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Result<Self> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), Path::new(LOCAL_CONFIG_FILE), join, caps, format, no_color)
    }

    /// Same as [`Config::load`] with explicit config file locations.
    pub fn load_from(
        global_path: Option<&Path>,
        local_path: &Path,
        join: Option<String>,
        caps: bool,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                let global_config = Self::from_file(global_path)?;
                config = config.merge(global_config);
            }
        }

        // Local config overrides global
        if local_path.exists() {
            let local_config = Self::from_file(local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if join.is_some() {
            config.join = join;
        }
        if caps {
            config.caps = true;
        }
        if let Some(format) = format {
            config.format = format;
        }
        if no_color {
            config.color = false;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // other's values override self's if they differ from defaults
        let defaults = Self::default();
        if other.join.is_some() {
            self.join = other.join;
        }
        if other.caps != defaults.caps {
            self.caps = other.caps;
        }
        if other.format != defaults.format {
            self.format = other.format;
        }
        if other.color != defaults.color {
            self.color = other.color;
        }
        self
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            join: self.join.clone(),
            caps: self.caps,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
