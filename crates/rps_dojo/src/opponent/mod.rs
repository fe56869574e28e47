//! The automated opponent: adjudication, move policy, and HTTP service.

mod policy;
mod service;

pub use policy::{QLearningPolicy, adjudicate, random_move};
pub use service::{OpponentState, SharedOpponent, router};
