//! Error taxonomy for session operations.

use derive_more::{Display, Error};

/// Failures surfaced by session operations.
///
/// No operation partially commits: any error leaves the session state
/// exactly as it was before the call. None of these is fatal to the
/// session except [`GameError::SessionClosed`], which is deliberate
/// teardown.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The submitted input is not a recognized move.
    #[display("invalid move: {token:?}")]
    InvalidMove {
        /// The rejected input token.
        token: String,
    },
    /// A round is already awaiting the resolver.
    #[display("a round is already in flight")]
    RoundInFlight,
    /// The resolver could not be reached or answered with a failure.
    #[display("round resolution failed: {reason}")]
    RoundResolution {
        /// Description of the underlying transport failure.
        reason: String,
    },
    /// The resolver answered with a token outside the recognized set.
    #[display("resolver returned unrecognized {field} {value:?}")]
    DataIntegrity {
        /// Which reply field carried the bad token.
        field: &'static str,
        /// The unrecognized token.
        value: String,
    },
    /// `reset_battle` was invoked before the battle phase was first reached.
    #[display("battle has not started yet")]
    BattleNotStarted,
    /// The session was closed; any in-flight reply was discarded.
    #[display("session closed")]
    SessionClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_token() {
        let err = GameError::InvalidMove {
            token: "lizard".to_string(),
        };
        assert_eq!(err.to_string(), "invalid move: \"lizard\"");

        let err = GameError::DataIntegrity {
            field: "result",
            value: "tie".to_string(),
        };
        assert_eq!(err.to_string(), "resolver returned unrecognized result \"tie\"");
    }
}
