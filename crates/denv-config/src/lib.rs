use anyhow::Context;
use denv_core::{DEFAULT_PLACEHOLDER, RedactMode, RedactOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults for every redaction option, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub mode: RedactMode,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub keep_length: bool,

    #[serde(default)]
    pub strip_secrets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RedactMode::default(),
            placeholder: default_placeholder(),
            keep_length: false,
            strip_secrets: false,
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Config {
    /// Load config from `explicit`, or from the default location if a file
    /// exists there. Falls back to built-in defaults; never writes anything.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), mode = %config.mode, "loaded config");
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "denv")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn redact_options(&self) -> RedactOptions {
        RedactOptions {
            mode: self.mode,
            placeholder: self.placeholder.clone(),
            keep_length: self.keep_length,
            strip_secrets: self.strip_secrets,
        }
    }
}
