//! Application configuration.

/// Config file model.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// Config file location and loading.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ServerConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigStore, ConfigStoreError};
