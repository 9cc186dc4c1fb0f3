use std::ops::RangeInclusive;

use crate::domain::Card;

pub const MAX_ROUNDS: u8 = 4;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 13;

/// Every starting deck holds this many cards per elder sign.
pub const CARDS_PER_ELDER_SIGN: usize = 5;

/// Special cards that may be mixed into the starting deck.
pub const SPECIAL_CARDS: [Card; 5] = [
    Card::EvilPresence,
    Card::InsanitysGrasp,
    Card::Mirage,
    Card::Paranoia,
    Card::PrivateEye,
];

/// Role distribution and deck composition for a given player count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSetup {
    pub investigators: usize,
    pub cultists: usize,
    pub elder_signs: usize,
}

impl PlayerSetup {
    const fn new(investigators: usize, cultists: usize, elder_signs: usize) -> Self {
        Self {
            investigators,
            cultists,
            elder_signs,
        }
    }

    /// Total cards dealt at the start of the game.
    pub const fn deck_size(&self) -> usize {
        self.elder_signs * CARDS_PER_ELDER_SIGN
    }
}

// Indexed by player count - MIN_PLAYERS.
const PLAYER_SETUPS: [PlayerSetup; MAX_PLAYERS - MIN_PLAYERS + 1] = [
    PlayerSetup::new(1, 1, 2),
    PlayerSetup::new(2, 1, 3),
    PlayerSetup::new(3, 2, 4),
    PlayerSetup::new(4, 2, 5),
    PlayerSetup::new(4, 2, 6),
    PlayerSetup::new(5, 3, 7),
    PlayerSetup::new(6, 3, 8),
    PlayerSetup::new(7, 3, 9),
    PlayerSetup::new(7, 4, 10),
    PlayerSetup::new(7, 4, 11),
    PlayerSetup::new(8, 4, 12),
    PlayerSetup::new(8, 5, 13),
];

pub const fn supported_player_counts() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

pub fn setup_for_player_count(player_count: usize) -> Option<PlayerSetup> {
    if !supported_player_counts().contains(&player_count) {
        return None;
    }
    PLAYER_SETUPS.get(player_count - MIN_PLAYERS).copied()
}
