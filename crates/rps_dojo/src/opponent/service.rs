//! HTTP service exposing the automated opponent as a Round Resolver.

use crate::opponent::policy::{self, QLearningPolicy};
use crate::wire::{BattleReply, ErrorReply, RoundRequest, TrainReply};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rps_core::{Move, ScoreTally};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// How many training rounds the service counts before reporting completion.
const TRAINING_ROUNDS_REQUIRED: u32 = 10;
/// Battle score at which the service reports game over.
const BATTLE_SCORE_LIMIT: u32 = 3;

/// Mutable state behind the opponent endpoints.
///
/// The completion flags computed here are the service's own bookkeeping;
/// session engines keep authoritative counters of their own and treat
/// these as advisory.
#[derive(Debug)]
pub struct OpponentState {
    rng: StdRng,
    policy: QLearningPolicy,
    training_rounds_done: u32,
    training_scores: ScoreTally,
    battle_scores: ScoreTally,
}

impl OpponentState {
    /// Creates opponent state seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates opponent state with a fixed seed, for deterministic play.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let policy = QLearningPolicy::new(&mut rng);
        Self {
            rng,
            policy,
            training_rounds_done: 0,
            training_scores: ScoreTally::default(),
            battle_scores: ScoreTally::default(),
        }
    }
}

impl Default for OpponentState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle used by the axum handlers.
pub type SharedOpponent = Arc<Mutex<OpponentState>>;

/// Builds the opponent router with its two resolver endpoints.
pub fn router(state: SharedOpponent) -> Router {
    Router::new()
        .route("/train", post(train))
        .route("/battle", post(battle))
        .with_state(state)
}

/// One training round: epsilon-greedy pick, adjudicate, learn.
#[instrument(skip(state, req))]
async fn train(
    State(state): State<SharedOpponent>,
    Json(req): Json<RoundRequest>,
) -> Result<Json<TrainReply>, (StatusCode, Json<ErrorReply>)> {
    let player_move = parse_move(&req.player_move)?;
    let mut opponent = state.lock().unwrap();
    let opponent = &mut *opponent;

    let ai_move = opponent.policy.pick(&mut opponent.rng, player_move);
    let result = policy::adjudicate(player_move, ai_move);
    opponent.policy.learn(player_move, ai_move, result);

    opponent.training_scores = opponent.training_scores.record(result);
    opponent.training_rounds_done += 1;
    let training_complete = opponent.training_rounds_done >= TRAINING_ROUNDS_REQUIRED;
    if training_complete {
        info!(
            rounds = opponent.training_rounds_done,
            "training block complete, counter restarts"
        );
        opponent.training_rounds_done = 0;
    }

    debug!(player_move = %player_move, ai_move = %ai_move, result = %result, "training round");

    Ok(Json(TrainReply {
        ai_move: ai_move.to_string(),
        result: result.to_string(),
        message: policy::taunt(&mut opponent.rng, result).to_string(),
        training_complete,
        training_scores: opponent.training_scores.into(),
    }))
}

/// One battle round: uniform random pick, adjudicate, track the race.
#[instrument(skip(state, req))]
async fn battle(
    State(state): State<SharedOpponent>,
    Json(req): Json<RoundRequest>,
) -> Result<Json<BattleReply>, (StatusCode, Json<ErrorReply>)> {
    let player_move = parse_move(&req.player_move)?;
    let mut opponent = state.lock().unwrap();
    let opponent = &mut *opponent;

    let ai_move = policy::random_move(&mut opponent.rng);
    let result = policy::adjudicate(player_move, ai_move);
    opponent.battle_scores = opponent.battle_scores.record(result);

    // Snapshot before any reset so the final board survives in the reply.
    let final_scores = opponent.battle_scores;
    let mut game_over = false;
    let mut winner = None;
    if final_scores.player >= BATTLE_SCORE_LIMIT || final_scores.opponent >= BATTLE_SCORE_LIMIT {
        game_over = true;
        winner = Some(
            if final_scores.player >= BATTLE_SCORE_LIMIT {
                "player"
            } else {
                "ai"
            }
            .to_string(),
        );
        info!(winner = ?winner, "battle block complete, board restarts");
        opponent.battle_scores = ScoreTally::default();
    }

    debug!(player_move = %player_move, ai_move = %ai_move, result = %result, "battle round");

    Ok(Json(BattleReply {
        ai_move: ai_move.to_string(),
        result: result.to_string(),
        message: policy::taunt(&mut opponent.rng, result).to_string(),
        battle_scores: opponent.battle_scores.into(),
        final_scores: final_scores.into(),
        game_over,
        winner,
    }))
}

fn parse_move(token: &str) -> Result<Move, (StatusCode, Json<ErrorReply>)> {
    token.parse().map_err(|_| {
        warn!(token, "rejected round with unrecognized move");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorReply {
                error: "Invalid move".to_string(),
            }),
        )
    })
}
