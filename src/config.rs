//! Configuration for heatprops.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (HEATPROPS_MAX_INPUT_BYTES, HEATPROPS_LOG, RUST_LOG)
//! 2. Config file (--config, or .heatprops/config.yaml)
//! 3. Defaults (no input size limit, "warn" log filter)
//!
//! Config file discovery:
//! - Searches the current directory and its parents for .heatprops/config.yaml
//!
//! Only ambient settings live here. The classification rules are fixed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Env var overriding the input size limit
pub const ENV_MAX_INPUT_BYTES: &str = "HEATPROPS_MAX_INPUT_BYTES";
/// Env var holding a tracing filter directive
pub const ENV_LOG: &str = "HEATPROPS_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Largest input file accepted, in bytes
    pub max_input_bytes: Option<u64>,
    /// Tracing filter directive, e.g. "heatprops=debug"
    pub log_filter: Option<String>,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Input size limit in bytes, unlimited when unset
    pub max_input_bytes: Option<u64>,
    pub log_filter: String,
    /// Path to config file (if one was used)
    pub config_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            config_file: None,
        }
    }
}

impl Settings {
    /// Merge a parsed config file with environment overrides
    pub fn resolve<F>(file: Option<(PathBuf, ConfigFile)>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config_file, file) = match file {
            Some((path, file)) => (Some(path), file),
            None => (None, ConfigFile::default()),
        };

        let max_input_bytes = match env(ENV_MAX_INPUT_BYTES) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{ENV_MAX_INPUT_BYTES} is not a byte count: {raw}"))?,
            ),
            None => file.max_input_bytes,
        };

        let log_filter = env(ENV_LOG)
            .or_else(|| env("RUST_LOG"))
            .or(file.log_filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            max_input_bytes,
            log_filter,
            config_file,
        })
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".heatprops").join("config.yaml");
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load settings from an explicit config path, or discover one from the
/// current directory, then apply process environment overrides
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::current_dir()
            .ok()
            .and_then(|cwd| find_config_file(&cwd)),
    };

    let file = match path {
        Some(path) => {
            let parsed = load_config_file(&path)?;
            Some((path, parsed))
        }
        None => None,
    };

    Settings::resolve(file, |key| std::env::var(key).ok())
}
