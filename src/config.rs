//! Widget configuration
//!
//! Optional TOML file under the XDG config dir, with environment variable
//! overrides applied on top. The file is never written by the widget.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::{self, monitor_query, profile_tool, status};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Program returning the monitor list as JSON
    #[serde(default = "default_monitor_command")]
    pub monitor_command: String,

    /// Program listing, reporting and applying profiles
    #[serde(default = "default_profile_command")]
    pub profile_command: String,

    /// Status text glyph
    #[serde(default = "default_glyph")]
    pub glyph: String,

    /// Status bar CSS class
    #[serde(default = "default_class")]
    pub class: String,
}

fn default_monitor_command() -> String {
    monitor_query::PROGRAM.to_string()
}

fn default_profile_command() -> String {
    profile_tool::PROGRAM.to_string()
}

fn default_glyph() -> String {
    status::GLYPH.to_string()
}

fn default_class() -> String {
    status::CLASS.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            monitor_command: default_monitor_command(),
            profile_command: default_profile_command(),
            glyph: default_glyph(),
            class: default_class(),
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load from `path` (or the default location), then apply env overrides.
    ///
    /// A missing file yields defaults; a file that fails to parse is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::path);

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context(format!("Failed to read config file {}", config_path.display()))?;
            let config = Self::from_toml(&contents)
                .context(format!("Failed to parse config file {}", config_path.display()))?;
            info!(path = %config_path.display(), "Loaded config");
            config
        } else {
            debug!(path = %config_path.display(), "No config file found, using defaults");
            Self::default()
        };

        config.apply_env_overrides(|key| env::var(key).ok());
        config.validate();
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid config TOML")
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let overrides = [
            (constants::env::MONITOR_CMD, &mut self.monitor_command),
            (constants::env::PROFILE_CMD, &mut self.profile_command),
            (constants::env::GLYPH, &mut self.glyph),
            (constants::env::CLASS, &mut self.class),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key) {
                debug!(key, value = %value, "Applying env override");
                *slot = value;
            }
        }
    }

    /// Replace blank values with defaults
    fn validate(&mut self) {
        let defaults = Self::default();
        let fields = [
            ("monitor_command", &mut self.monitor_command, defaults.monitor_command),
            ("profile_command", &mut self.profile_command, defaults.profile_command),
            ("glyph", &mut self.glyph, defaults.glyph),
            ("class", &mut self.class, defaults.class),
        ];
        for (name, slot, default) in fields {
            if slot.trim().is_empty() {
                warn!(field = name, default = %default, "Blank config value, using default");
                *slot = default;
            }
        }
    }
}
