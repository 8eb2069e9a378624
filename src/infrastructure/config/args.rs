use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "packdesk",
    version,
    about = "A terminal client for the pack calculator service",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pack service base URL.
    #[arg(long, env = "PACKDESK_SERVER_URL", value_name = "URL")]
    pub server_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub request_timeout: Option<u64>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,
}
