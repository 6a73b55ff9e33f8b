//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config <FILE>`, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for `plane install`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Services installed when none are named on the command line.
    pub services: Vec<String>,
    /// Runtime version used when `--runtime` is not given.
    pub runtime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            services: plane_core::domain::DEFAULT_SERVICES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            runtime: plane_core::domain::RuntimeVersion::default().to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default location
    /// is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(explicit) => explicit.clone(),
            None => {
                let default_path = Self::config_path();
                if !default_path.is_file() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file '{}'", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.plane.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "plane", "plane")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".plane.toml"))
    }
}
