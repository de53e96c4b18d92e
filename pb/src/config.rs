//! Phonebook configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file name
const LOCAL_CONFIG: &str = ".phonebook.yml";

/// Main phonebook configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capacity used when the operator picks the default size
    #[serde(rename = "default-capacity")]
    pub default_capacity: usize,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Colorize menu output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_capacity: crate::DEFAULT_CAPACITY,
            log_level: None,
            color: true,
        }
    }
}

impl Config {
    /// Config files to consider, most specific first
    ///
    /// An explicit path is the only candidate when given.
    fn candidate_paths(config_path: Option<&PathBuf>) -> Vec<PathBuf> {
        if let Some(path) = config_path {
            return vec![path.clone()];
        }

        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("phonebook").join("phonebook.yml"));
        }
        paths
    }

    /// Read just the log level, before logging exists
    ///
    /// Takes the first candidate file that parses and ignores every failure;
    /// [`Config::load`] reports those once a subscriber is installed.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::candidate_paths(config_path)
            .into_iter()
            .filter(|path| path.exists())
            .find_map(|path| {
                let content = fs::read_to_string(&path).ok()?;
                serde_yaml::from_str::<Self>(&content).ok()
            })
            .and_then(|config| config.log_level)
    }

    /// Load configuration
    ///
    /// An explicit path must load. Otherwise `.phonebook.yml` in the working
    /// directory, then `<config_dir>/phonebook/phonebook.yml`; unreadable
    /// implicit files are skipped with a warning.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for path in Self::candidate_paths(None) {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable config"),
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let mut config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        if config.default_capacity == 0 {
            tracing::warn!(
                path = %path.as_ref().display(),
                fallback = crate::DEFAULT_CAPACITY,
                "default-capacity must be positive, using fallback"
            );
            config.default_capacity = crate::DEFAULT_CAPACITY;
        }

        tracing::info!(path = %path.as_ref().display(), "Loaded config");
        Ok(config)
    }

    /// Positive capacity used when the operator asks for the default size
    pub fn fallback_capacity(&self) -> usize {
        if self.default_capacity == 0 {
            crate::DEFAULT_CAPACITY
        } else {
            self.default_capacity
        }
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}

/// Turn a requested capacity into the one a directory is built with
///
/// `None` stands for input that was not a number. Missing or non-positive
/// requests fall back to `fallback`, itself replaced by
/// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) when zero. The result is
/// always positive.
pub fn resolve_capacity(requested: Option<i64>, fallback: usize) -> usize {
    let fallback = if fallback == 0 { crate::DEFAULT_CAPACITY } else { fallback };
    match requested.map(usize::try_from) {
        Some(Ok(capacity)) if capacity > 0 => capacity,
        _ => {
            tracing::warn!(?requested, fallback, "Invalid capacity, using default");
            fallback
        }
    }
}
