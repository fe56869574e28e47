//! Wire types for the resolver HTTP contract.
//!
//! Both the transport client and the opponent service speak this shape.
//! The completion flags (`training_complete`, `game_over`, `winner`) are
//! the resolver's own bookkeeping; session engines treat them as advisory.

use rps_core::ScoreTally;
use serde::{Deserialize, Serialize};

/// Body of a round submission: `{"move": "rock"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRequest {
    /// The player's move token.
    #[serde(rename = "move")]
    pub player_move: String,
}

/// Scoreboard as the resolver reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireScores {
    /// Player wins.
    pub player: u32,
    /// Opponent wins.
    pub ai: u32,
    /// Draws.
    pub draws: u32,
}

impl From<ScoreTally> for WireScores {
    fn from(tally: ScoreTally) -> Self {
        Self {
            player: tally.player,
            ai: tally.opponent,
            draws: tally.draws,
        }
    }
}

/// Reply from `POST /train`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainReply {
    /// Opponent move token.
    pub ai_move: String,
    /// Outcome token, relative to the player.
    pub result: String,
    /// Taunt for the round.
    pub message: String,
    /// Advisory: the resolver's own idea of training completion.
    pub training_complete: bool,
    /// Advisory: the resolver's own training scoreboard.
    pub training_scores: WireScores,
}

/// Reply from `POST /battle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleReply {
    /// Opponent move token.
    pub ai_move: String,
    /// Outcome token, relative to the player.
    pub result: String,
    /// Taunt for the round.
    pub message: String,
    /// Advisory: the resolver's live battle scoreboard.
    pub battle_scores: WireScores,
    /// Advisory: the scoreboard as it stood after this round.
    pub final_scores: WireScores,
    /// Advisory: the resolver's own idea of the battle ending.
    pub game_over: bool,
    /// Advisory: `"player"` or `"ai"` when the resolver declares a winner.
    pub winner: Option<String>,
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    /// Failure description.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_request_uses_move_key() {
        let body = serde_json::to_string(&RoundRequest {
            player_move: "rock".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"move":"rock"}"#);
    }

    #[test]
    fn test_battle_reply_parses_backend_shape() {
        let body = r#"{
            "ai_move": "paper",
            "result": "lose",
            "message": "I win this round!",
            "battle_scores": {"player": 0, "ai": 0, "draws": 0},
            "final_scores": {"player": 1, "ai": 3, "draws": 2},
            "game_over": true,
            "winner": "ai"
        }"#;
        let reply: BattleReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.ai_move, "paper");
        assert!(reply.game_over);
        assert_eq!(reply.winner.as_deref(), Some("ai"));
        assert_eq!(reply.final_scores.ai, 3);
    }

    #[test]
    fn test_train_reply_parses_backend_shape() {
        let body = r#"{
            "ai_move": "rock",
            "result": "draw",
            "message": "We tied!",
            "training_complete": false,
            "training_scores": {"player": 2, "ai": 1, "draws": 1}
        }"#;
        let reply: TrainReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.result, "draw");
        assert!(!reply.training_complete);
        assert_eq!(reply.training_scores.player, 2);
    }

    #[test]
    fn test_wire_scores_from_tally() {
        let tally = ScoreTally {
            player: 4,
            opponent: 2,
            draws: 1,
        };
        let wire = WireScores::from(tally);
        assert_eq!(
            wire,
            WireScores {
                player: 4,
                ai: 2,
                draws: 1
            }
        );
    }
}
