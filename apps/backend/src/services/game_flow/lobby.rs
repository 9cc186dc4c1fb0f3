use tracing::info;

use super::{GameFlowService, GameMutationResult};
use crate::domain::actions::{JoinGame, NewGame, StartGame, UpdateGameOptions};
use crate::domain::{GameOptions, PlayerId};
use crate::error::AppError;
use crate::store::GameStore;

impl<S: GameStore> GameFlowService<S> {
    /// Create a game, optionally joining its creator.
    ///
    /// Fails with `GAME_EXISTS` if the id is taken.
    pub async fn create_game(
        &self,
        game_id: &str,
        options: Option<GameOptions>,
        player_id: Option<PlayerId>,
    ) -> Result<GameMutationResult, AppError> {
        info!(game_id, creator = ?player_id, "Creating game");
        self.run_mutation(
            NewGame {
                game_id: game_id.to_string(),
                options,
                player_id,
            }
            .into(),
            Vec::new(),
        )
        .await
    }

    pub async fn join_game(
        &self,
        game_id: &str,
        player_id: &str,
    ) -> Result<GameMutationResult, AppError> {
        self.run_mutation(
            JoinGame {
                game_id: game_id.to_string(),
                player_id: player_id.to_string(),
            }
            .into(),
            Vec::new(),
        )
        .await
    }

    /// Replace the options of a game that has not started yet.
    pub async fn update_game_options(
        &self,
        game_id: &str,
        options: GameOptions,
    ) -> Result<GameMutationResult, AppError> {
        self.run_mutation(
            UpdateGameOptions {
                game_id: game_id.to_string(),
                options,
            }
            .into(),
            Vec::new(),
        )
        .await
    }

    /// Assign roles, deal round one and hand the flashlight to a random player.
    pub async fn start_game(&self, game_id: &str) -> Result<GameMutationResult, AppError> {
        self.run_mutation(
            StartGame {
                game_id: game_id.to_string(),
            }
            .into(),
            Vec::new(),
        )
        .await
    }
}
