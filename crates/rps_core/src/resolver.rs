//! The Round Resolver seam.

use crate::types::{Move, Phase};
use async_trait::async_trait;
use derive_more::{Display, Error};

/// Raw reply from a Round Resolver.
///
/// Tokens arrive unvalidated; the session engine is the gate that decides
/// whether they are recognized members of the move and outcome sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReply {
    /// The opponent's move token (e.g. `"rock"`).
    pub opponent_move: String,
    /// The outcome token, relative to the player (e.g. `"win"`).
    pub result: String,
    /// Display message supplied by the resolver.
    pub message: String,
}

impl RoundReply {
    /// Creates a reply from raw tokens.
    pub fn new(
        opponent_move: impl Into<String>,
        result: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            opponent_move: opponent_move.into(),
            result: result.into(),
            message: message.into(),
        }
    }
}

/// Transport-level resolver failure.
///
/// Timeouts, connection errors, and non-success statuses all collapse into
/// this one type; the session engine does not distinguish causes.
#[derive(Debug, Clone, Display, Error)]
#[display("resolver call failed: {message}")]
pub struct ResolveError {
    /// Failure description.
    pub message: String,
}

impl ResolveError {
    /// Creates a new resolver failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// External authority that adjudicates a submitted move.
///
/// Given the player's move and the session phase, an implementation returns
/// the opponent's move and an outcome classification. It may fail for any
/// transport reason. Any completion flags a resolver reports alongside the
/// reply are advisory only; session counters are the single source of truth
/// for phase transitions.
#[async_trait]
pub trait RoundResolver: Send + Sync {
    /// Resolves one round.
    async fn resolve(&self, phase: Phase, player_move: Move) -> Result<RoundReply, ResolveError>;
}
