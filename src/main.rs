//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: Twilio
//! - Application: Bot, Dispatcher, Sessions
//! - Interface: Webhook Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod lexicon;
mod strategies;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::bot::Bot;
use crate::domain::config::AppConfig;
use crate::infrastructure::twilio::TwilioService;
use crate::interface::webhook::{self, AppState};

#[derive(Parser, Debug)]
#[command(name = "parcero", about = "WhatsApp bot con personalidad colombiana")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    // Ensure data directory exists
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new("data/session.log");
    if log_path.exists() {
        let _ = fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = config
        .system
        .log_filter
        .clone()
        .unwrap_or_else(|| "info,hyper=warn,reqwest=warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting Parcero...");

    // 3. Initialize the Bot and the Transport
    let bot = Arc::new(Bot::new(&config.bot)?);
    let transport = Arc::new(TwilioService::new(&config.services.twilio)?);
    tracing::info!(
        "Bot '{}' ready (style: {})",
        bot.identity().name,
        bot.identity().style_tag
    );

    // 4. Serve the Webhook
    let app = webhook::router(AppState {
        bot,
        transport,
    });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
