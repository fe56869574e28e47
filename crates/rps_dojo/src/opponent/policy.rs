//! Opponent move selection and round adjudication.

use rand::Rng;
use rand::rngs::StdRng;
use rps_core::{Move, Outcome};

const MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// Q-learning step size.
const ALPHA: f64 = 0.2;
/// Q-learning discount factor.
const GAMMA: f64 = 0.95;
/// Probability the training opponent explores instead of exploiting.
const TRAINING_EXPLORATION: f64 = 0.5;

/// Adjudicates one round, relative to the player.
pub fn adjudicate(player: Move, opponent: Move) -> Outcome {
    use Move::{Paper, Rock, Scissors};
    if player == opponent {
        return Outcome::Draw;
    }
    match (player, opponent) {
        (Rock, Scissors) | (Paper, Rock) | (Scissors, Paper) => Outcome::Win,
        _ => Outcome::Lose,
    }
}

/// Uniform random move (the battle opponent).
pub fn random_move(rng: &mut StdRng) -> Move {
    MOVES[rng.random_range(0..MOVES.len())]
}

/// Picks a taunt for the round's outcome.
pub fn taunt(rng: &mut StdRng, outcome: Outcome) -> &'static str {
    const WIN: [&str; 2] = ["Wow, you crushed me!", "You're unstoppable!"];
    const LOSE: [&str; 2] = ["I win this round!", "Better luck next time!"];
    const DRAW: [&str; 2] = ["Great minds think alike!", "We tied!"];

    let pool: &[&str] = match outcome {
        Outcome::Win => &WIN,
        Outcome::Lose => &LOSE,
        Outcome::Draw => &DRAW,
    };
    pool[rng.random_range(0..pool.len())]
}

fn index(mv: Move) -> usize {
    match mv {
        Move::Rock => 0,
        Move::Paper => 1,
        Move::Scissors => 2,
    }
}

/// Epsilon-greedy Q-learning opponent for the training phase.
///
/// The table is keyed by (player move, opponent move); exploitation plays
/// the argmax of the row for the player's submitted move.
#[derive(Debug, Clone)]
pub struct QLearningPolicy {
    q: [[f64; 3]; 3],
}

impl QLearningPolicy {
    /// Creates a policy with a randomly initialized table, so each training
    /// run varies.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut q = [[0.0; 3]; 3];
        for row in &mut q {
            for cell in row.iter_mut() {
                *cell = rng.random_range(-0.1..0.1);
            }
        }
        Self { q }
    }

    /// Picks the training opponent's move: explore with probability
    /// `TRAINING_EXPLORATION`, otherwise exploit the table.
    pub fn pick(&self, rng: &mut StdRng, player_move: Move) -> Move {
        if rng.random_range(0.0..1.0) < TRAINING_EXPLORATION {
            return random_move(rng);
        }
        let row = &self.q[index(player_move)];
        let mut best = 0;
        for (i, value) in row.iter().enumerate() {
            if *value > row[best] {
                best = i;
            }
        }
        MOVES[best]
    }

    /// Folds one adjudicated round back into the table.
    ///
    /// The reward is from the opponent's perspective: -1 when the player
    /// wins, +1 when the player loses, 0 on a draw.
    pub fn learn(&mut self, player_move: Move, opponent_move: Move, outcome: Outcome) {
        let reward = match outcome {
            Outcome::Win => -1.0,
            Outcome::Lose => 1.0,
            Outcome::Draw => 0.0,
        };
        let (u, a) = (index(player_move), index(opponent_move));
        let future = self.q[a].iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.q[u][a] = (1.0 - ALPHA) * self.q[u][a] + ALPHA * (reward + GAMMA * future);
    }
}
