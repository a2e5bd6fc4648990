//! Configuration file support.
//!
//! Loads an optional `notifme.toml`. Command-line flags override file values.

use std::path::{Path, PathBuf};

use notifme_site::SiteAssets;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::CliError;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "notifme.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where `render` writes the document
    pub output: PathBuf,
    /// Preview port; 0 picks a free one
    pub port: u16,
    /// Document-level rendering options
    pub assets: SiteAssets,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist").join("index.html"),
            port: 0,
            assets: SiteAssets::default(),
        }
    }
}

impl SiteConfig {
    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist and parse. Without one, `notifme.toml` in
    /// `cwd` is used when present; problems with it are logged and defaults win.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::load_implicit(&cwd.join(DEFAULT_CONFIG_FILE))),
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn load_implicit(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}: {}; using defaults", e, source_message(&e));
                Self::default()
            }
        }
    }
}

fn source_message(err: &CliError) -> String {
    std::error::Error::source(err)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
