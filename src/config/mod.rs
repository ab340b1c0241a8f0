// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Header configuration loading.
//!
//! The header reads a single JSON file describing the leave duration, the
//! initial theme, the search placeholder and the items of both menus.
//! Every field has a default, so a missing file or a partial file is fine.
//!
//! # Example
//!
//! ```no_run
//! use dashboard_header::config::ConfigManager;
//!
//! let manager = ConfigManager::new("~/.config/dashboard-header/config.json".into())?;
//! let config = manager.load_or_default()?;
//! println!("Leave animation: {} ms", config.leave_duration_ms);
//! # Ok::<(), dashboard_header::config::ConfigError>(())
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{AlertSink, HeaderConfig, MenuItemConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/dashboard-header/config.json";

/// Locates, reads and writes the header configuration file.
#[derive(Debug)]
pub struct ConfigManager {
    /// Expanded path to the configuration file.
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the given path.
    ///
    /// `~` and `$VARS` are expanded. The file does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` if the path is not valid UTF-8 or
    /// references an unset environment variable.
    pub fn new(config_path: PathBuf) -> Result<Self, ConfigError> {
        let raw = config_path
            .to_str()
            .ok_or_else(|| ConfigError::InvalidPath(config_path.display().to_string()))?;

        let expanded = shellexpand::full(raw)
            .map_err(|e| ConfigError::InvalidPath(format!("{}: {}", raw, e)))?;

        Ok(Self {
            config_path: PathBuf::from(expanded.as_ref()),
        })
    }

    /// Returns the expanded configuration path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Reads and validates the configuration file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` if the file does not exist
    /// - `ConfigError::Parse` if it is not valid configuration JSON
    /// - `ConfigError::Invalid` if a value is out of range
    pub fn read_config(&self) -> Result<HeaderConfig, ConfigError> {
        if !self.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config: HeaderConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: self.config_path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %self.config_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Like [`ConfigManager::read_config`], but a missing file yields the
    /// defaults.
    pub fn load_or_default(&self) -> Result<HeaderConfig, ConfigError> {
        match self.read_config() {
            Err(ConfigError::NotFound(path)) => {
                tracing::info!(path = %path.display(), "no configuration file, using defaults");
                Ok(HeaderConfig::default())
            }
            other => other,
        }
    }

    /// Writes `config` as pretty-printed JSON, creating parent directories.
    pub fn write_config(&self, config: &HeaderConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = config.to_json()?;
        fs::write(&self.config_path, json)?;
        tracing::info!(path = %self.config_path.display(), "configuration written");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
