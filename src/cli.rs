//! Command-line arguments

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Room recorded when none is given
pub const DEFAULT_ROOM: &str = "TestAutoRecord";

/// Start a Jibri recording for a conference room
#[derive(Parser, Debug)]
#[command(name = "jibri-start-recording")]
#[command(version)]
#[command(about = "Ask a Jibri instance to start recording a conference room")]
pub struct Cli {
    /// Room to record
    #[arg(value_name = "ROOM", default_value = DEFAULT_ROOM, value_parser = NonEmptyStringValueParser::new())]
    pub room: String,

    /// Jibri API base URL (overrides JIBRI_API_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Read settings from this env file instead of the environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}
