//! Domain layer: pure game logic types and reducers.

pub mod actions;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod fixtures;
pub mod game_transition;
pub mod investigation;
pub mod lifecycle;
pub mod reducer;
pub mod rules;
pub mod seed_derivation;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_investigation;

// Re-exports for ergonomics
pub use actions::Action;
pub use cards_types::{Card, Role};
pub use dealing::{deal_cards_to_players, shuffle};
pub use investigation::{on_play_card, PlayCardResult};
pub use reducer::reduce;
pub use rules::{setup_for_player_count, PlayerSetup, MAX_ROUNDS};
pub use seed_derivation::{command_rng, derive_command_seed};
pub use state::{Game, GameId, GameOptions, GameState, Player, PlayerId, Secret};
