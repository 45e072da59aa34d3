//! Launcher configuration.

use crate::error::ConfigError;
use crate::paths::{get_application_directories, get_config_path};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default number of rows shown by the launcher.
pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Upper bound for `max_results`; the list is a short launcher view.
pub const MAX_RESULTS_LIMIT: usize = 64;

/// Default terminal emulator for `Terminal=true` apps.
pub const DEFAULT_TERMINAL: &str = "kitty";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Maximum rows after filtering.
    pub max_results: usize,
    /// Terminal emulator command, invoked as `<terminal> -e sh -c ...`.
    pub terminal: String,
    /// Overrides the default application directories when set.
    pub directories: Option<Vec<PathBuf>>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            terminal: DEFAULT_TERMINAL.to_string(),
            directories: None,
        }
    }
}

impl LauncherConfig {
    /// Load config from the default location.
    /// Missing, unreadable or malformed files fall back to defaults.
    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load config from `path`, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(Some(config)) => {
                info!("Loaded launcher config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Ignoring launcher config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read config from `path`. A missing file is `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(Self::from_json(&content)?))
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(content)?;
        config.max_results = config.max_results.clamp(1, MAX_RESULTS_LIMIT);
        Ok(config)
    }

    /// Directories to scan, in priority order.
    pub fn application_directories(&self) -> Vec<PathBuf> {
        self.directories
            .clone()
            .unwrap_or_else(get_application_directories)
    }
}
