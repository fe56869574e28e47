//! Command-line interface for rps_dojo.

use clap::{Parser, Subcommand};

/// Gesture duel - train against a learning opponent, then battle it
#[derive(Parser, Debug)]
#[command(name = "rps_dojo")]
#[command(about = "Gesture duel against a learning opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the opponent service (the Round Resolver)
    Opponent {
        /// Port to bind to
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Fixed RNG seed for a deterministic opponent
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play in the terminal against the configured resolver
    Play {
        /// Path to the configuration file
        #[arg(short, long, default_value = "rps_dojo.toml")]
        config: std::path::PathBuf,
    },
}
