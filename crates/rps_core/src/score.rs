//! Score tallying for a single phase.

use crate::types::Outcome;
use serde::{Deserialize, Serialize};

/// Running count of player wins, opponent wins, and draws within a phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Rounds the player has won.
    pub player: u32,
    /// Rounds the opponent has won.
    pub opponent: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl ScoreTally {
    /// Returns the tally with `outcome` folded in.
    ///
    /// Exactly one field is incremented per call; the receiver is unchanged.
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self {
                player: self.player + 1,
                ..self
            },
            Outcome::Lose => Self {
                opponent: self.opponent + 1,
                ..self
            },
            Outcome::Draw => Self {
                draws: self.draws + 1,
                ..self
            },
        }
    }

    /// Total rounds recorded in this tally.
    pub fn rounds(&self) -> u32 {
        self.player + self.opponent + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_increments_player_only() {
        let tally = ScoreTally {
            player: 2,
            opponent: 1,
            draws: 3,
        };
        let next = tally.record(Outcome::Win);
        assert_eq!(
            next,
            ScoreTally {
                player: 3,
                opponent: 1,
                draws: 3
            }
        );
    }

    #[test]
    fn test_lose_increments_opponent_only() {
        let tally = ScoreTally::default();
        let next = tally.record(Outcome::Lose);
        assert_eq!(
            next,
            ScoreTally {
                player: 0,
                opponent: 1,
                draws: 0
            }
        );
    }

    #[test]
    fn test_draw_increments_draws_only() {
        let tally = ScoreTally::default();
        let next = tally.record(Outcome::Draw);
        assert_eq!(
            next,
            ScoreTally {
                player: 0,
                opponent: 0,
                draws: 1
            }
        );
    }

    #[test]
    fn test_record_leaves_receiver_unchanged() {
        let tally = ScoreTally::default();
        let _ = tally.record(Outcome::Win);
        assert_eq!(tally, ScoreTally::default());
    }

    #[test]
    fn test_rounds_counts_every_field() {
        let mut tally = ScoreTally::default();
        for outcome in [Outcome::Win, Outcome::Lose, Outcome::Draw, Outcome::Win] {
            tally = tally.record(outcome);
        }
        assert_eq!(tally.rounds(), 4);
    }
}
