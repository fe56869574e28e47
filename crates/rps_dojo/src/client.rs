//! HTTP transport for the Round Resolver.

use crate::wire::{BattleReply, RoundRequest, TrainReply};
use async_trait::async_trait;
use rps_core::{Move, Phase, ResolveError, RoundReply, RoundResolver};
use tracing::{debug, instrument, warn};

/// Round Resolver reached over HTTP.
///
/// Forwards an already-acquired bearer credential when one is configured;
/// it never acquires or validates one itself. Every transport failure,
/// timeout, or non-success status collapses into a [`ResolveError`].
#[derive(Debug, Clone)]
pub struct HttpRoundResolver {
    base_url: String,
    bearer_token: Option<String>,
    client: reqwest::Client,
}

impl HttpRoundResolver {
    /// Creates a client for the resolver at `base_url`.
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(phase: Phase) -> &'static str {
        match phase {
            Phase::Training => "/train",
            Phase::Battle | Phase::GameOver => "/battle",
        }
    }

    async fn post_round(&self, path: &str, player_move: Move) -> Result<reqwest::Response, ResolveError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(&RoundRequest {
            player_move: player_move.to_string(),
        });
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ResolveError::new(format!("resolver unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, %url, "resolver answered with failure status");
            return Err(ResolveError::new(format!("resolver answered {status}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl RoundResolver for HttpRoundResolver {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn resolve(&self, phase: Phase, player_move: Move) -> Result<RoundReply, ResolveError> {
        let path = Self::endpoint(phase);
        debug!(path, player_move = %player_move, "submitting round");
        let response = self.post_round(path, player_move).await?;

        // Completion flags in the replies are advisory; only the tokens the
        // session engine validates travel onward.
        let reply = match phase {
            Phase::Training => {
                let body: TrainReply = response
                    .json()
                    .await
                    .map_err(|e| ResolveError::new(format!("malformed training reply: {e}")))?;
                if body.training_complete {
                    debug!("resolver reports training complete (advisory, ignored)");
                }
                RoundReply::new(body.ai_move, body.result, body.message)
            }
            Phase::Battle | Phase::GameOver => {
                let body: BattleReply = response
                    .json()
                    .await
                    .map_err(|e| ResolveError::new(format!("malformed battle reply: {e}")))?;
                if body.game_over {
                    debug!(winner = ?body.winner, "resolver reports game over (advisory, ignored)");
                }
                RoundReply::new(body.ai_move, body.result, body.message)
            }
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_maps_to_endpoint() {
        assert_eq!(HttpRoundResolver::endpoint(Phase::Training), "/train");
        assert_eq!(HttpRoundResolver::endpoint(Phase::Battle), "/battle");
    }
}
