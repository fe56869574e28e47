//! The session engine: phase transitions, counters, and game-over
//! bookkeeping around a Round Resolver.

use crate::error::GameError;
use crate::resolver::{RoundReply, RoundResolver};
use crate::state::{SessionConfig, SessionState};
use crate::types::{Move, Outcome, Phase};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// One completed round, with the snapshot taken after it was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// The move the player submitted.
    pub player_move: Move,
    /// The move the resolver picked for the opponent.
    pub opponent_move: Move,
    /// Outcome of the round, relative to the player.
    pub outcome: Outcome,
    /// Display message supplied by the resolver.
    pub message: String,
    /// Session state after the round was applied.
    pub state: SessionState,
}

/// Result of a [`Session::submit_move`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A round was resolved and applied.
    Played(RoundRecord),
    /// The session is at game over; nothing was submitted.
    GameOver(SessionState),
}

/// A running game session.
///
/// Cloning yields another handle to the same session. All mutation goes
/// through [`Session::submit_move`] and [`Session::reset_battle`]; at most
/// one round is ever awaiting the resolver.
#[derive(Debug)]
pub struct Session<R> {
    inner: Arc<SessionInner<R>>,
}

impl<R> Clone for Session<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[derive(Debug)]
struct SessionInner<R> {
    resolver: R,
    state: Mutex<SessionState>,
    round_in_flight: AtomicBool,
    open: AtomicBool,
}

/// Releases the in-flight latch on every exit path.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<R: RoundResolver> Session<R> {
    /// Creates a session in the training phase (or directly in battle when
    /// the training limit is zero).
    #[instrument(skip(resolver))]
    pub fn new(config: SessionConfig, resolver: R) -> Self {
        info!(
            training_limit = config.training_limit,
            battle_win_threshold = config.battle_win_threshold,
            "creating session"
        );
        Self {
            inner: Arc::new(SessionInner {
                resolver,
                state: Mutex::new(SessionState::new(config)),
                round_in_flight: AtomicBool::new(false),
                open: AtomicBool::new(true),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.lock_state().clone()
    }

    /// True until [`Session::close`] is called.
    pub fn is_open(&self) -> bool {
        self.inner.open.load(Ordering::SeqCst)
    }

    /// True while a submitted round is awaiting the resolver.
    pub fn round_in_flight(&self) -> bool {
        self.inner.round_in_flight.load(Ordering::SeqCst)
    }

    /// Plays one round.
    ///
    /// Parses `input` into a move, sends it to the resolver, validates the
    /// reply, and applies the outcome in one atomic step. At game over the
    /// call is a no-op returning the current snapshot. Every error leaves
    /// the session state untouched.
    #[instrument(skip(self))]
    pub async fn submit_move(&self, input: &str) -> Result<SubmitOutcome, GameError> {
        let player_move: Move = input.trim().parse().map_err(|_| {
            warn!(token = input, "rejected unrecognized move");
            GameError::InvalidMove {
                token: input.to_string(),
            }
        })?;

        if !self.is_open() {
            return Err(GameError::SessionClosed);
        }

        // Claim the single flight slot before touching state.
        if self
            .inner
            .round_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("move submitted while a round is in flight");
            return Err(GameError::RoundInFlight);
        }
        let _flight = FlightGuard(&self.inner.round_in_flight);

        let phase = {
            let state = self.lock_state();
            if state.is_game_over() {
                debug!("game over, submit is a no-op");
                return Ok(SubmitOutcome::GameOver(state.clone()));
            }
            *state.phase()
        };

        // Suspension point. The state lock is never held across it.
        let reply = self
            .inner
            .resolver
            .resolve(phase, player_move)
            .await
            .map_err(|e| {
                warn!(error = %e, "round resolution failed");
                GameError::RoundResolution {
                    reason: e.to_string(),
                }
            })?;

        // The session may have been torn down while the call was out; the
        // reply is then discarded unconditionally.
        if !self.is_open() {
            debug!("session closed mid-flight, discarding resolver reply");
            return Err(GameError::SessionClosed);
        }

        let (outcome, opponent_move) = validate_reply(&reply)?;

        let state = {
            let mut state = self.lock_state();
            state.apply_round(outcome);
            state.clone()
        };

        info!(
            player_move = %player_move,
            opponent_move = %opponent_move,
            outcome = %outcome,
            phase = %state.phase(),
            "round applied"
        );

        Ok(SubmitOutcome::Played(RoundRecord {
            player_move,
            opponent_move,
            outcome,
            message: reply.message,
            state,
        }))
    }

    /// Restarts the battle, keeping training results.
    ///
    /// Valid from battle and from game over; there is no edge back to
    /// training. Idempotent.
    #[instrument(skip(self))]
    pub fn reset_battle(&self) -> Result<SessionState, GameError> {
        if !self.is_open() {
            return Err(GameError::SessionClosed);
        }
        if self.round_in_flight() {
            warn!("battle reset attempted while a round is in flight");
            return Err(GameError::RoundInFlight);
        }

        let mut state = self.lock_state();
        if *state.phase() == Phase::Training {
            return Err(GameError::BattleNotStarted);
        }
        state.reset_battle();
        info!("battle reset");
        Ok(state.clone())
    }

    /// Closes the session.
    ///
    /// Any in-flight resolver reply is discarded when it arrives, and
    /// subsequent operations fail with [`GameError::SessionClosed`].
    #[instrument(skip(self))]
    pub fn close(&self) {
        info!("closing session");
        self.inner.open.store(false, Ordering::SeqCst);
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.inner.state.lock().unwrap()
    }
}

/// Gate admitting only recognized members of the outcome and move sets.
fn validate_reply(reply: &RoundReply) -> Result<(Outcome, Move), GameError> {
    let outcome: Outcome = reply.result.parse().map_err(|_| {
        warn!(token = %reply.result, "resolver returned unrecognized outcome");
        GameError::DataIntegrity {
            field: "result",
            value: reply.result.clone(),
        }
    })?;
    let opponent_move: Move = reply.opponent_move.parse().map_err(|_| {
        warn!(token = %reply.opponent_move, "resolver returned unrecognized move");
        GameError::DataIntegrity {
            field: "ai_move",
            value: reply.opponent_move.clone(),
        }
    })?;
    Ok((outcome, opponent_move))
}
