//! Configuration loaded from `<config dir>/pr-lineup/config.toml`.

use crate::error::{Error, Result};
use crate::report::DEFAULT_UTC_OFFSET_HOURS;
use crate::window::{DEFAULT_MAX_PAGES, ScanOptions};
use chrono::FixedOffset;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's config dir.
const CONFIG_DIR: &str = "pr-lineup";

/// Filename for the config file.
const CONFIG_FILE: &str = "config.toml";

/// User configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// GitHub Enterprise host (None for github.com)
    pub host: Option<String>,
    /// Page ceiling for the reference PR scan
    pub max_pages: u32,
    /// Offset (hours from UTC) used for the report footer
    pub utc_offset_hours: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None,
            max_pages: DEFAULT_MAX_PAGES,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl Config {
    /// Scan options derived from this config
    pub const fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_pages: self.max_pages,
        }
    }

    /// Report offset as a chrono offset
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                Error::Config(format!(
                    "utc_offset_hours must be between -23 and 23, got {}",
                    self.utc_offset_hours
                ))
            })
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.max_pages == 0 {
            return Err(Error::Config("max_pages must be at least 1".to_string()));
        }
        self.utc_offset()?;
        Ok(())
    }
}

/// Default config file location, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from `path`, or from the default location when `None`.
///
/// A missing default file yields `Config::default()`. An explicitly given
/// path must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(Config::default()),
        },
    };

    if !explicit && !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    config.validate()?;
    Ok(config)
}
