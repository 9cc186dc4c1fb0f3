#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod store;
pub mod telemetry;


// Re-exports for public API
pub use config::GameServiceConfig;
pub use domain::game_transition::GameTransition;
pub use domain::{Action, Card, Game, GameId, GameOptions, GameState, Player, PlayerId, Role};
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::game_flow::{GameFlowService, GameMutationResult};
pub use store::{AppliedUpdate, GameReducer, GameStore, InMemoryGameStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
