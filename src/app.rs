//! Entry-point helpers shared by the binary and tests

use serde_json::Value;
use std::time::Duration;

use crate::cli::Cli;
use crate::client::RecordingStarter;
use crate::config::JibriConfig;
use crate::error::RecordingError;

/// Process exit status for a start-recording outcome
pub fn exit_status(result: &Result<Value, RecordingError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Start recording `room_name` once and return the exit status
pub async fn run<S>(starter: &S, room_name: &str) -> u8
where
    S: RecordingStarter + ?Sized,
{
    exit_status(&starter.start_recording(room_name).await)
}

/// Resolve the configuration the command line asks for
pub fn resolve_config(cli: &Cli) -> Result<JibriConfig, dotenv::Error> {
    let mut config = match &cli.env_file {
        Some(path) => JibriConfig::from_env_file(path)?,
        None => JibriConfig::from_env(),
    };

    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(ms) = cli.timeout_ms {
        config = config.with_timeout(Duration::from_millis(ms));
    }

    Ok(config)
}
