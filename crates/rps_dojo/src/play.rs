//! Interactive terminal loop driving a session end to end.

use crate::client::HttpRoundResolver;
use crate::config::GameConfig;
use anyhow::Result;
use rps_core::{GameError, Phase, Session, SessionState, SubmitOutcome};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// Runs the interactive loop against the configured resolver.
pub async fn run(config: GameConfig) -> Result<()> {
    let resolver = HttpRoundResolver::new(
        config.resolver_url().clone(),
        config.bearer_token().clone(),
    );
    let session = Session::new(config.session(), resolver);

    println!("rock / paper / scissors - 'reset' restarts the battle, 'quit' leaves");
    print_scoreboard(&session.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => match session.reset_battle() {
                Ok(state) => {
                    println!("battle reset");
                    print_scoreboard(&state);
                }
                Err(e) => println!("{e}"),
            },
            input => play_round(&session, input).await,
        }
    }

    session.close();
    Ok(())
}

async fn play_round(session: &Session<HttpRoundResolver>, input: &str) {
    match session.submit_move(input).await {
        Ok(SubmitOutcome::Played(round)) => {
            println!(
                "you: {}  opponent: {}  -  {}",
                round.player_move, round.opponent_move, round.outcome
            );
            println!("opponent says: {}", round.message);
            print_scoreboard(&round.state);
        }
        Ok(SubmitOutcome::GameOver(state)) => {
            println!("the battle is already decided - 'reset' to play again");
            print_scoreboard(&state);
        }
        Err(GameError::InvalidMove { token }) => {
            println!("'{token}' is not a move (rock, paper, scissors)");
        }
        Err(GameError::RoundInFlight) => {
            println!("still waiting on the opponent, try again");
        }
        Err(e @ (GameError::RoundResolution { .. } | GameError::DataIntegrity { .. })) => {
            warn!(error = %e, "round failed");
            println!("could not reach the opponent, try again");
        }
        Err(e) => println!("{e}"),
    }
}

fn print_scoreboard(state: &SessionState) {
    match state.phase() {
        Phase::Training => {
            let tally = state.training_tally();
            println!(
                "[training {}/{}] you {} - {} opponent, {} draws",
                state.training_rounds_played(),
                state.training_limit(),
                tally.player,
                tally.opponent,
                tally.draws
            );
        }
        Phase::Battle => {
            let tally = state.battle_tally();
            println!(
                "[battle, first to {}] you {} - {} opponent, {} draws",
                state.battle_win_threshold(),
                tally.player,
                tally.opponent,
                tally.draws
            );
        }
        Phase::GameOver => {
            let tally = (*state.final_tally()).unwrap_or_default();
            match state.winner() {
                Some(side) => println!("game over - {side} wins!"),
                None => println!("game over"),
            }
            println!(
                "final score: you {} - {} opponent, {} draws",
                tally.player, tally.opponent, tally.draws
            );
        }
    }
}
