//! Reading and first-run creation of the TOML config file.

use super::app_config::AppConfig;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Failure to locate, read or create the config file.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// The platform reports no config directory.
    #[error("no platform config directory found, pass --config")]
    NoConfigDir,
    /// Reading or writing the file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The default config could not be rendered as TOML.
    #[error("cannot serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Location of the config file for one run.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Uses `override_path` when given, otherwise `config.toml` in the
    /// platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigStoreError::NoConfigDir` when no override is given and
    /// the platform has no config directory.
    pub fn locate(override_path: Option<&Path>) -> Result<Self, ConfigStoreError> {
        let path = match override_path {
            Some(path) => path.to_path_buf(),
            None => AppConfig::default_config_dir()
                .ok_or(ConfigStoreError::NoConfigDir)?
                .join(CONFIG_FILE_NAME),
        };
        Ok(Self { path })
    }

    /// Store backed by an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the config file. A missing file is created with defaults, a
    /// malformed one is left untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigStoreError` if the file cannot be read or the default
    /// cannot be written.
    pub fn load(&self) -> Result<AppConfig, ConfigStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(self.parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Config file missing, writing defaults");
                let config = AppConfig::default();
                self.write(&config)?;
                Ok(config)
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn parse(&self, content: &str) -> AppConfig {
        toml::from_str(content).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Malformed config file, using defaults");
            AppConfig::default()
        })
    }

    /// Writes through a temp file in the same directory, then renames.
    fn write(&self, config: &AppConfig) -> Result<(), ConfigStoreError> {
        let content = toml::to_string_pretty(config)?;
        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| self.io_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> ConfigStoreError {
        ConfigStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let store = ConfigStore::at(&path);

        let config = store.load().unwrap();

        assert_eq!(config.server.url, "http://localhost:8080");
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[server]"));
        assert!(written.contains("[ui]"));
    }

    #[test]
    fn test_malformed_file_is_kept_and_defaults_used() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "invalid_toml = [").unwrap();

        let config = ConfigStore::at(&path).load().unwrap();

        assert_eq!(config.ui.notification_duration, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_override_path_is_used_as_is() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "[server]\nurl = \"http://packs:9000\"\n").unwrap();

        let config = ConfigStore::locate(Some(&custom))
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(config.server.url, "http://packs:9000");
    }

    #[test]
    fn test_written_defaults_load_back() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE_NAME));
        store.load().unwrap();

        let config = store.load().unwrap();

        assert_eq!(config.server.request_timeout, 30);
        assert!(config.ui.mouse);
    }

    #[test]
    fn test_unreadable_path_reports_io_error() {
        let dir = tempdir().unwrap();

        let err = ConfigStore::at(dir.path()).load().unwrap_err();

        assert!(matches!(err, ConfigStoreError::Io { .. }));
    }
}
