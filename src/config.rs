// src/config.rs

//! rpmlog configuration
//!
//! # Example config.toml
//!
//! ```toml
//! debug = false
//!
//! [rpm]
//! command = "rpm"
//! # Query an installation mounted elsewhere
//! root = "/mnt/sysimage"
//! dbpath = "/var/lib/rpm"
//! ```
//!
//! Lookup order: `--config PATH` if given, otherwise the user file
//! (`~/.config/rpmlog/config.toml`) if it exists, otherwise
//! `/etc/rpmlog/config.toml` if it exists, otherwise built-in defaults.

use crate::error::{Error, Result};
use crate::log::ParserConfig;
use crate::packages::RpmCommand;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// System-wide configuration file
pub const DEFAULT_CONFIG_PATH: &str = "/etc/rpmlog/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log every parsed identity and query
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub rpm: RpmConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpmConfig {
    #[serde(default = "default_rpm_command")]
    pub command: PathBuf,

    #[serde(default)]
    pub dbpath: Option<PathBuf>,

    #[serde(default)]
    pub root: Option<PathBuf>,
}

fn default_rpm_command() -> PathBuf {
    PathBuf::from("rpm")
}

impl Default for RpmConfig {
    fn default() -> Self {
        Self {
            command: default_rpm_command(),
            dbpath: None,
            root: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Load from an explicit path, or from the first default file that exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        for path in default_paths() {
            if path.is_file() {
                debug!("Loading configuration from {}", path.display());
                return Self::load(&path);
            }
        }
        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig { debug: self.debug }
    }

    pub fn rpm_command(&self) -> RpmCommand {
        RpmCommand {
            program: self.rpm.command.clone(),
            dbpath: self.rpm.dbpath.clone(),
            root: self.rpm.root.clone(),
        }
    }
}

/// Candidate config files, highest priority first
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("rpmlog").join("config.toml"));
    }
    paths.push(PathBuf::from(DEFAULT_CONFIG_PATH));
    paths
}
