//! Structural invariants of the session state.
//!
//! The test suites check these against every reachable state; the engine
//! maintains them by construction.

use crate::state::SessionState;
use crate::types::{Phase, Side};

/// A property that must hold for every reachable session state.
pub trait Invariant {
    /// Returns true if the property holds for `state`.
    fn holds(state: &SessionState) -> bool;

    /// Human-readable property description.
    fn description() -> &'static str;
}

/// Invariant: the training counter stays within `[0, training_limit]`.
pub struct TrainingRoundsBounded;

impl Invariant for TrainingRoundsBounded {
    fn holds(state: &SessionState) -> bool {
        *state.training_rounds_played() <= *state.training_limit()
    }

    fn description() -> &'static str {
        "training rounds played never exceed the training limit"
    }
}

/// Invariant: at most one side of the battle tally has met the threshold.
///
/// Each round increments exactly one tally field, so both sides crossing
/// in the same round is structurally impossible.
pub struct SingleThresholdCrossing;

impl Invariant for SingleThresholdCrossing {
    fn holds(state: &SessionState) -> bool {
        let tally = state.battle_tally();
        let threshold = *state.battle_win_threshold();
        !(tally.player >= threshold && tally.opponent >= threshold)
    }

    fn description() -> &'static str {
        "both battle sides never meet the win threshold together"
    }
}

/// Invariant: the game is over exactly when a side has met the threshold,
/// and the winner and frozen tally designate that side.
pub struct WinnerMatchesPhase;

impl Invariant for WinnerMatchesPhase {
    fn holds(state: &SessionState) -> bool {
        let tally = state.battle_tally();
        let threshold = *state.battle_win_threshold();
        let crossed = tally.player >= threshold || tally.opponent >= threshold;

        match state.phase() {
            Phase::GameOver => {
                let winner_qualifies = match state.winner() {
                    Some(Side::Player) => tally.player >= threshold,
                    Some(Side::Opponent) => tally.opponent >= threshold,
                    None => false,
                };
                crossed && winner_qualifies && state.final_tally().is_some()
            }
            Phase::Training | Phase::Battle => {
                !crossed && state.winner().is_none() && state.final_tally().is_none()
            }
        }
    }

    fn description() -> &'static str {
        "winner and frozen tally are defined exactly at game over"
    }
}

/// Checks every invariant, returning the description of the first one that
/// does not hold.
pub fn check_all(state: &SessionState) -> Result<(), &'static str> {
    if !TrainingRoundsBounded::holds(state) {
        return Err(TrainingRoundsBounded::description());
    }
    if !SingleThresholdCrossing::holds(state) {
        return Err(SingleThresholdCrossing::description());
    }
    if !WinnerMatchesPhase::holds(state) {
        return Err(WinnerMatchesPhase::description());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionConfig;
    use crate::types::Outcome;

    #[test]
    fn test_fresh_session_satisfies_all() {
        let state = SessionState::new(SessionConfig::default());
        assert_eq!(check_all(&state), Ok(()));
    }

    #[test]
    fn test_invariants_hold_through_a_full_game() {
        let mut state = SessionState::new(SessionConfig::new(3, 2));
        let outcomes = [
            Outcome::Win,
            Outcome::Lose,
            Outcome::Draw,
            // Battle from here.
            Outcome::Win,
            Outcome::Lose,
            Outcome::Win,
        ];
        for outcome in outcomes {
            state.apply_round(outcome);
            assert_eq!(check_all(&state), Ok(()), "after {outcome:?}");
        }
        assert!(state.is_game_over());

        state.reset_battle();
        assert_eq!(check_all(&state), Ok(()));
    }
}
