//! Project configuration file support.
//!
//! An optional `pkg-to-jsr.toml` in the root directory can override what is
//! read from `package.json`:
//!
//! ```toml
//! # directory holding package.json, relative to this file
//! root_dir = "packages/core"
//!
//! [exports]
//! "." = "./src/index.ts"
//! "./utils" = "./src/utils.ts"
//! ```
//!
//! `exports` may also be a single path string.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::{ExportsField, PackageJson};
use crate::ops::errors::GenerateError;

/// Config file name, looked up in the root directory only.
pub const CONFIG_FILE: &str = "pkg-to-jsr.toml";

/// pkg-to-jsr configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Replaces the `exports` field of package.json before normalization
    pub exports: Option<ExportsField>,

    /// Directory containing package.json, relative to the config file
    pub root_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let contents = std::fs::read_to_string(path).map_err(|e| GenerateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&contents, path)
    }

    /// Parse configuration content.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, GenerateError> {
        toml::from_str(contents).map_err(|e| GenerateError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load `pkg-to-jsr.toml` from `dir`, or defaults if there is none.
    pub fn load_from_dir(dir: &Path) -> Result<Self, GenerateError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Directory to search for package.json, given the directory the config
    /// was loaded from.
    pub fn package_dir(&self, config_dir: &Path) -> PathBuf {
        match self.root_dir {
            Some(ref root_dir) => config_dir.join(root_dir),
            None => config_dir.to_path_buf(),
        }
    }

    /// Apply config overrides to a parsed package.json.
    pub fn apply(&self, pkg: &mut PackageJson) {
        if let Some(ref exports) = self.exports {
            tracing::debug!("using exports from {}", CONFIG_FILE);
            pkg.exports = Some(exports.clone());
        }
    }
}
