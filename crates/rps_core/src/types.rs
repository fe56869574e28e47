//! Core domain types for the gesture duel.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A hand gesture submitted by either side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Move {
    /// Rock beats scissors.
    Rock,
    /// Paper beats rock.
    Paper,
    /// Scissors beat paper.
    Scissors,
}

/// Result of one round, relative to the player.
///
/// Produced only by the Round Resolver; the session engine validates the
/// token before trusting it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// The player won the round.
    Win,
    /// The player lost the round.
    Lose,
    /// Both sides played the same gesture.
    Draw,
}

/// Phase of a game session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Fixed-length warm-up sequence of rounds.
    Training,
    /// Race to the win threshold.
    Battle,
    /// Battle decided; stable rest state until the battle is reset.
    GameOver,
}

/// The side of the table a score belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}
