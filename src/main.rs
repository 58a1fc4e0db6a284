use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use reel::{config::Config, services::RecommendationClient, ui};

/// Sends tracing output to the log file; stdout belongs to the terminal UI
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reel=info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    init_tracing(&config)?;

    tracing::info!(
        recommender_api_url = %config.recommender_api_url,
        default_content_type = %config.default_content_type,
        default_count = config.default_count.get(),
        "Starting reel"
    );

    // Wire the HTTP client into the front end
    let client = Arc::new(RecommendationClient::from_config(&config));
    let mut app = ui::App::new(client, &config);

    ui::run(&mut app)
}
