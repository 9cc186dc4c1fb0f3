//! Storage collaborator for games.
//!
//! A store owns the authoritative copy of every game, serializes
//! read-compute-write per game, and fans changes out to subscribers.

pub mod in_memory;

use std::collections::BTreeMap;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::state::{Game, GameId};
use crate::errors::domain::DomainError;

pub use in_memory::InMemoryGameStore;

/// Computes the next game from an owned copy of the current one (`None` if
/// the game does not exist).
pub type GameReducer = Box<dyn FnOnce(Option<Game>) -> Result<Game, DomainError> + Send>;

/// Result of a successful [`GameStore::apply_to`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedUpdate {
    pub previous: Option<Game>,
    pub current: Game,
}

impl AppliedUpdate {
    pub fn changed(&self) -> bool {
        self.previous.as_ref() != Some(&self.current)
    }
}

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Load the game, run `reducer` on a copy, and persist the result.
    ///
    /// Reducer failures are returned unchanged and nothing is persisted.
    /// No other writer touches `game_id` between the load and the write.
    async fn apply_to(
        &self,
        game_id: &str,
        reducer: GameReducer,
    ) -> Result<AppliedUpdate, DomainError>;

    /// Snapshot of one game.
    async fn load(&self, game_id: &str) -> Result<Option<Game>, DomainError>;

    /// Snapshot of every game.
    async fn games(&self) -> Result<BTreeMap<GameId, Game>, DomainError>;

    /// The current value of one game, then every distinct later value.
    async fn subscribe_to_game(
        &self,
        game_id: &str,
    ) -> Result<BoxStream<'static, Option<Game>>, DomainError>;

    /// The current game index, then every later index that differs.
    async fn all_games(&self) -> Result<BoxStream<'static, BTreeMap<GameId, Game>>, DomainError>;
}
