//! Game configuration loading.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rps_core::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the duel: session rules and resolver location.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Training rounds before battle begins.
    #[serde(default = "default_training_limit")]
    training_limit: u32,

    /// Wins required to end the battle.
    #[serde(default = "default_battle_win_threshold")]
    battle_win_threshold: u32,

    /// Base URL of the Round Resolver (or its fronting proxy).
    #[serde(default = "default_resolver_url")]
    resolver_url: String,

    /// Bearer credential forwarded with resolver requests, when required.
    #[serde(default)]
    bearer_token: Option<String>,
}

fn default_training_limit() -> u32 {
    10
}

fn default_battle_win_threshold() -> u32 {
    3
}

fn default_resolver_url() -> String {
    "http://127.0.0.1:3001".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            training_limit: default_training_limit(),
            battle_win_threshold: default_battle_win_threshold(),
            resolver_url: default_resolver_url(),
            bearer_token: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(
            training_limit = config.training_limit,
            battle_win_threshold = config.battle_win_threshold,
            "config loaded"
        );
        Ok(config)
    }

    /// Loads from `path` when it exists, defaults otherwise.
    ///
    /// A bearer credential missing from the file falls back to the
    /// `RPS_DOJO_TOKEN` environment variable. The credential is only ever
    /// forwarded, never validated here.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            Self::from_file(path)?
        } else {
            debug!("config file not found, using defaults");
            Self::default()
        };

        if config.bearer_token.is_none() {
            if let Ok(token) = std::env::var("RPS_DOJO_TOKEN") {
                debug!("bearer credential taken from environment");
                config.bearer_token = Some(token);
            }
        }
        Ok(config)
    }

    /// Session rules carried by this configuration.
    pub fn session(&self) -> SessionConfig {
        SessionConfig::new(self.training_limit, self.battle_win_threshold)
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
