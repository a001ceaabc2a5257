use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jibri_recording_starter::app::{resolve_config, run};
use jibri_recording_starter::cli::Cli;
use jibri_recording_starter::JibriClient;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            error!("❌ Failed to load configuration: {}", err);
            return ExitCode::from(1);
        }
    };
    info!("Using Jibri API at {}", config.base_url);

    let client = match JibriClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            error!("❌ Failed to create Jibri client: {}", err);
            return ExitCode::from(1);
        }
    };

    ExitCode::from(run(&client, &cli.room).await)
}
