use crate::error::Result;
use crate::export::OutputFormat;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_threads")]
    pub threads: usize,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_include_other")]
    pub include_other: bool,
    #[serde(default)]
    pub total: bool,
    #[serde(default)]
    pub proportions: bool,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_threads() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn default_batch_size() -> usize {
    10_000
}

fn default_include_other() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            batch_size: default_batch_size(),
            include_other: default_include_other(),
            total: false,
            proportions: false,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// `config.toml` in the platform config directory, if one can be resolved.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("org", "basecontent", "basecontent")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load the user config, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load() -> Self {
        match Self::path() {
            Some(config_path) if config_path.exists() => {
                Self::load_from(&config_path).unwrap_or_else(|e| {
                    warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
                    Config::default()
                })
            }
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::path().ok_or_else(|| anyhow!("no config directory available"))?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content)?;
        Ok(())
    }
}
