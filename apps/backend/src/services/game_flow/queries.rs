use std::collections::BTreeMap;
use std::future::ready;

use futures::stream::{self, BoxStream, StreamExt};

use super::GameFlowService;
use crate::domain::{Game, GameId};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::store::GameStore;

fn game_not_found(game_id: &str) -> AppError {
    AppError::not_found(ErrorCode::GameNotFound, format!("No game {game_id} exists."))
}

impl<S: GameStore> GameFlowService<S> {
    pub async fn get_game(&self, game_id: &str) -> Result<Game, AppError> {
        self.store
            .load(game_id)
            .await?
            .ok_or_else(|| game_not_found(game_id))
    }

    /// Ids of every known game, in order.
    pub async fn list_games(&self) -> Result<Vec<GameId>, AppError> {
        Ok(self.store.games().await?.into_keys().collect())
    }

    /// The current game index, then each later index.
    pub async fn subscribe_to_games(
        &self,
    ) -> Result<BoxStream<'static, BTreeMap<GameId, Game>>, AppError> {
        Ok(self.store.all_games().await?)
    }

    /// The current state of an existing game, then each distinct later state.
    pub async fn subscribe_to_game(
        &self,
        game_id: &str,
    ) -> Result<BoxStream<'static, Game>, AppError> {
        let mut updates = self.store.subscribe_to_game(game_id).await?;
        let current = match updates.next().await {
            Some(Some(game)) => game,
            _ => return Err(game_not_found(game_id)),
        };

        Ok(stream::once(ready(current))
            .chain(updates.filter_map(ready))
            .boxed())
    }
}
