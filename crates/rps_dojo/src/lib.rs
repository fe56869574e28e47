//! Gesture duel application crate.
//!
//! Wraps the pure session engine from `rps_core` with everything needed to
//! run the duel for real:
//!
//! - **Opponent**: HTTP Round Resolver with a Q-learning training opponent
//! - **Client**: reqwest transport implementing the resolver seam
//! - **Proxy**: fronting proxy binary for the resolver endpoints
//! - **Play**: interactive terminal loop
//!
//! # Example
//!
//! ```no_run
//! use rps_core::{Session, SessionConfig};
//! use rps_dojo::HttpRoundResolver;
//!
//! let resolver = HttpRoundResolver::new("http://127.0.0.1:3001", None);
//! let session = Session::new(SessionConfig::default(), resolver);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod config;
pub mod opponent;
pub mod play;
pub mod wire;

// Crate-level exports
pub use client::HttpRoundResolver;
pub use config::{ConfigError, GameConfig};
