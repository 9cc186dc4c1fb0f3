use super::{GameFlowService, GameMutationResult};
use crate::domain::actions::{NextRound, PlayCard, RestartGame};
use crate::domain::game_transition::GameTransition;
use crate::error::AppError;
use crate::store::GameStore;

impl<S: GameStore> GameFlowService<S> {
    /// `source` reveals the `card_number`-th card (1-based) of `target`'s hand.
    pub async fn investigate(
        &self,
        game_id: &str,
        source: &str,
        target: &str,
        card_number: usize,
    ) -> Result<GameMutationResult, AppError> {
        self.run_mutation(
            PlayCard {
                game_id: game_id.to_string(),
                source_player: source.to_string(),
                target_player: target.to_string(),
                card_number,
            }
            .into(),
            Vec::new(),
        )
        .await
    }

    /// Resume a paused game with a fresh deal.
    pub async fn next_round(&self, game_id: &str) -> Result<GameMutationResult, AppError> {
        self.run_mutation(
            NextRound {
                game_id: game_id.to_string(),
            }
            .into(),
            Vec::new(),
        )
        .await
    }

    /// Throw the game away and start again with the same players and options.
    pub async fn restart_game(&self, game_id: &str) -> Result<GameMutationResult, AppError> {
        self.run_mutation(
            RestartGame {
                game_id: game_id.to_string(),
            }
            .into(),
            vec![GameTransition::GameRestarted],
        )
        .await
    }
}
