//! Pure session state machine for the gesture duel.
//!
//! A session runs a fixed-length training phase, then a battle decided by a
//! win threshold. This crate owns the phase transitions, round counters,
//! score tallies, and game-over determination; adjudicating which gesture
//! beats which is delegated to an external [`RoundResolver`].
//!
//! # Example
//!
//! ```no_run
//! use rps_core::{Session, SessionConfig, SubmitOutcome};
//!
//! # async fn example(resolver: impl rps_core::RoundResolver) -> Result<(), rps_core::GameError> {
//! let session = Session::new(SessionConfig::default(), resolver);
//!
//! match session.submit_move("rock").await? {
//!     SubmitOutcome::Played(round) => println!("{}", round.outcome),
//!     SubmitOutcome::GameOver(_) => println!("battle already decided"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod invariants;
mod resolver;
mod score;
mod session;
mod state;
mod types;

// Crate-level exports - Error taxonomy
pub use error::GameError;

// Crate-level exports - Invariant checks
pub use invariants::{
    Invariant, SingleThresholdCrossing, TrainingRoundsBounded, WinnerMatchesPhase, check_all,
};

// Crate-level exports - Resolver seam
pub use resolver::{ResolveError, RoundReply, RoundResolver};

// Crate-level exports - Score aggregation
pub use score::ScoreTally;

// Crate-level exports - Session engine
pub use session::{RoundRecord, Session, SubmitOutcome};

// Crate-level exports - State types
pub use state::{SessionConfig, SessionState};

// Crate-level exports - Domain types
pub use types::{Move, Outcome, Phase, Side};
