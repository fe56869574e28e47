//! Observable session state and its pure transitions.

use crate::score::ScoreTally;
use crate::types::{Outcome, Phase, Side};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed configuration for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SessionConfig {
    /// Training rounds to play before battle begins.
    pub training_limit: u32,
    /// Wins required to end the battle.
    pub battle_win_threshold: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            training_limit: 10,
            battle_win_threshold: 3,
        }
    }
}

/// Immutable snapshot of a game session.
///
/// Mutated exclusively by the session engine; everything observable about a
/// session lives here.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionState {
    /// Current phase.
    phase: Phase,
    /// Training rounds completed so far.
    training_rounds_played: u32,
    /// Training rounds required before battle begins.
    training_limit: u32,
    /// Scoreboard for the training phase.
    training_tally: ScoreTally,
    /// Scoreboard for the battle phase.
    battle_tally: ScoreTally,
    /// Wins required to end the battle.
    battle_win_threshold: u32,
    /// Battle scoreboard frozen at the round that ended the game.
    final_tally: Option<ScoreTally>,
    /// Side that met the threshold, once the game is over.
    winner: Option<Side>,
}

impl SessionState {
    /// Creates a fresh session.
    ///
    /// A zero training limit means there is nothing to train: the session
    /// begins directly in battle.
    pub fn new(config: SessionConfig) -> Self {
        let phase = if config.training_limit == 0 {
            Phase::Battle
        } else {
            Phase::Training
        };
        Self {
            phase,
            training_rounds_played: 0,
            training_limit: config.training_limit,
            training_tally: ScoreTally::default(),
            battle_tally: ScoreTally::default(),
            battle_win_threshold: config.battle_win_threshold,
            final_tally: None,
            winner: None,
        }
    }

    /// True once the battle has been decided.
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Folds one adjudicated outcome into the session.
    ///
    /// The whole update is one step: tally, counter, and any phase
    /// transition land together. No caller observes a saturated training
    /// counter still in the training phase, or a crossed threshold still
    /// in battle.
    pub(crate) fn apply_round(&mut self, outcome: Outcome) {
        match self.phase {
            Phase::Training => {
                self.training_tally = self.training_tally.record(outcome);
                self.training_rounds_played += 1;
                if self.training_rounds_played >= self.training_limit {
                    debug!(
                        rounds = self.training_rounds_played,
                        "training complete, entering battle"
                    );
                    self.phase = Phase::Battle;
                }
            }
            Phase::Battle => {
                self.battle_tally = self.battle_tally.record(outcome);
                let winner = if self.battle_tally.player >= self.battle_win_threshold {
                    Some(Side::Player)
                } else if self.battle_tally.opponent >= self.battle_win_threshold {
                    Some(Side::Opponent)
                } else {
                    None
                };
                if let Some(side) = winner {
                    debug!(winner = %side, "battle decided");
                    self.final_tally = Some(self.battle_tally);
                    self.winner = Some(side);
                    self.phase = Phase::GameOver;
                }
            }
            Phase::GameOver => unreachable!("rounds are never applied at game over"),
        }
    }

    /// Clears the battle back to a fresh start.
    ///
    /// Training results are untouched. Calling this twice in a row yields
    /// the same state as calling it once.
    pub(crate) fn reset_battle(&mut self) {
        self.battle_tally = ScoreTally::default();
        self.final_tally = None;
        self.winner = None;
        self.phase = Phase::Battle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_session(limit: u32, threshold: u32) -> SessionState {
        SessionState::new(SessionConfig::new(limit, threshold))
    }

    #[test]
    fn test_new_session_starts_training() {
        let state = training_session(10, 3);
        assert_eq!(*state.phase(), Phase::Training);
        assert_eq!(*state.training_rounds_played(), 0);
        assert!(state.winner().is_none());
        assert!(state.final_tally().is_none());
    }

    #[test]
    fn test_zero_training_limit_starts_battle() {
        let state = training_session(0, 3);
        assert_eq!(*state.phase(), Phase::Battle);
    }

    #[test]
    fn test_training_transition_lands_with_final_round() {
        let mut state = training_session(2, 3);
        state.apply_round(Outcome::Draw);
        assert_eq!(*state.phase(), Phase::Training);
        assert_eq!(*state.training_rounds_played(), 1);

        state.apply_round(Outcome::Lose);
        // Counter saturation and the phase change are one step.
        assert_eq!(*state.phase(), Phase::Battle);
        assert_eq!(*state.training_rounds_played(), 2);
        assert_eq!(state.training_tally().draws, 1);
        assert_eq!(state.training_tally().opponent, 1);
    }

    #[test]
    fn test_training_counter_frozen_in_battle() {
        let mut state = training_session(1, 3);
        state.apply_round(Outcome::Win);
        assert_eq!(*state.phase(), Phase::Battle);

        state.apply_round(Outcome::Win);
        assert_eq!(*state.training_rounds_played(), 1);
        assert_eq!(state.training_tally().player, 1);
        assert_eq!(state.battle_tally().player, 1);
    }

    #[test]
    fn test_threshold_crossing_freezes_final_tally() {
        let mut state = training_session(0, 2);
        state.apply_round(Outcome::Lose);
        state.apply_round(Outcome::Draw);
        assert_eq!(*state.phase(), Phase::Battle);

        state.apply_round(Outcome::Lose);
        assert_eq!(*state.phase(), Phase::GameOver);
        assert_eq!(*state.winner(), Some(Side::Opponent));
        let expected = ScoreTally {
            player: 0,
            opponent: 2,
            draws: 1,
        };
        assert_eq!(*state.final_tally(), Some(expected));
        assert_eq!(*state.battle_tally(), expected);
    }

    #[test]
    fn test_final_tally_does_not_alias_live_tally() {
        let mut state = training_session(0, 1);
        state.apply_round(Outcome::Win);
        let frozen = (*state.final_tally()).expect("game over");

        state.reset_battle();
        // The frozen copy survives the live tally being cleared.
        assert_eq!(frozen.player, 1);
        assert_eq!(state.battle_tally().player, 0);
    }

    #[test]
    fn test_reset_battle_is_idempotent_and_keeps_training() {
        let mut state = training_session(1, 1);
        state.apply_round(Outcome::Win);
        state.apply_round(Outcome::Win);
        assert!(state.is_game_over());

        state.reset_battle();
        let once = state.clone();
        state.reset_battle();
        assert_eq!(state, once);
        assert_eq!(*state.phase(), Phase::Battle);
        assert_eq!(state.training_tally().player, 1);
        assert!(state.winner().is_none());
    }
}
