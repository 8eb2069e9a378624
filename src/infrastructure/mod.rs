//! Infrastructure layer with external service adapters.

/// Pack calculator API client.
pub mod api;
/// Application configuration.
pub mod config;

pub use api::{ClientError, PackApiClient};
pub use config::{AppConfig, CliArgs, ConfigStore, LogLevel};
