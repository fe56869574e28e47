//! Gesture duel - unified CLI.

use anyhow::Result;
use clap::Parser;
use rps_dojo::cli::{Cli, Command};
use rps_dojo::config::GameConfig;
use rps_dojo::opponent::{self, OpponentState};
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Opponent { port, host, seed } => run_opponent(host, port, seed).await,
        Command::Play { config } => run_play(config).await,
    }
}

/// Run the opponent HTTP service
async fn run_opponent(host: String, port: u16, seed: Option<u64>) -> Result<()> {
    init_tracing("info");

    let state = match seed {
        Some(seed) => {
            info!(seed, "starting opponent with fixed seed");
            OpponentState::seeded(seed)
        }
        None => OpponentState::new(),
    };
    let app = opponent::router(Arc::new(Mutex::new(state)));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("✅ Opponent ready at http://{host}:{port}/");
    info!("🥊 Endpoints: POST /train, POST /battle");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the interactive terminal loop
async fn run_play(config_path: std::path::PathBuf) -> Result<()> {
    // Keep the prompt clean unless the player asks for logs.
    init_tracing("warn");

    let config = GameConfig::load(&config_path)?;
    rps_dojo::play::run(config).await
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
