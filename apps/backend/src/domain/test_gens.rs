// Proptest generators for domain types.
// Generators build valid games by construction instead of filtering.

use proptest::prelude::*;

use crate::domain::rules::{supported_player_counts, SPECIAL_CARDS};
use crate::domain::{Card, GameOptions};

/// Generate any card
pub fn card() -> impl Strategy<Value = Card> {
    prop::sample::select(Card::ALL.to_vec())
}

/// Generate a pool of cards of arbitrary size
pub fn card_pool(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card(), 0..=max)
}

/// Generate a player count the setup table supports
pub fn player_count() -> impl Strategy<Value = usize> {
    supported_player_counts()
}

/// Generate options that always fit in the smallest deck
pub fn game_options() -> impl Strategy<Value = GameOptions> {
    (0..=SPECIAL_CARDS.len(), 1usize..=3).prop_map(|(special_card_count, cthulhu_count)| {
        GameOptions {
            special_card_count,
            cthulhu_count,
        }
    })
}

/// Generate a seed for a deterministic RNG
pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
