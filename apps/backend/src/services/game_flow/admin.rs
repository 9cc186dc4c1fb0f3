//! Operator overrides. Neither call is recorded in the game's history.

use tracing::warn;

use super::{GameFlowService, GameMutationResult};
use crate::domain::actions::{ForceGameState, SetInvestigator};
use crate::domain::Game;
use crate::error::AppError;
use crate::store::GameStore;

impl<S: GameStore> GameFlowService<S> {
    pub async fn set_investigator(
        &self,
        game_id: &str,
        player_id: &str,
    ) -> Result<GameMutationResult, AppError> {
        self.run_mutation(
            SetInvestigator {
                game_id: game_id.to_string(),
                target_player: player_id.to_string(),
            }
            .into(),
            Vec::new(),
        )
        .await
    }

    /// Overwrite the stored game (keyed by `game.id`) with `game`.
    pub async fn force_game_state(&self, game: Game) -> Result<GameMutationResult, AppError> {
        warn!(game_id = %game.id, state = %game.state, "Forcing game state");
        self.run_mutation(
            ForceGameState {
                game: Box::new(game),
            }
            .into(),
            Vec::new(),
        )
        .await
    }
}
