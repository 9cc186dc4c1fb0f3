//! Core card-related types: Card, Role

use std::fmt;

use serde::{Deserialize, Serialize};

/// The cards that can appear in a player's hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Card {
    /// A "rock": revealing it has no effect.
    FutileInvestigation,
    ElderSign,
    Cthulhu,
    InsanitysGrasp,
    EvilPresence,
    Mirage,
    Paranoia,
    PrivateEye,
}

impl Card {
    pub const ALL: [Card; 8] = [
        Card::FutileInvestigation,
        Card::ElderSign,
        Card::Cthulhu,
        Card::InsanitysGrasp,
        Card::EvilPresence,
        Card::Mirage,
        Card::Paranoia,
        Card::PrivateEye,
    ];

    /// Label shown to players.
    pub const fn label(self) -> &'static str {
        match self {
            Card::FutileInvestigation => "Rock",
            Card::ElderSign => "Light",
            Card::Cthulhu => "Cthulhu",
            Card::InsanitysGrasp => "Insanity's Grasp",
            Card::EvilPresence => "Evil Presence",
            Card::Mirage => "Mirage",
            Card::Paranoia => "Paranoia",
            Card::PrivateEye => "Private Eye",
        }
    }

    /// Single-letter code used by fixtures and compact logs.
    pub const fn letter(self) -> char {
        match self {
            Card::FutileInvestigation => 'R',
            Card::ElderSign => 'S',
            Card::Cthulhu => 'C',
            Card::InsanitysGrasp => 'G',
            Card::EvilPresence => 'E',
            Card::Mirage => 'M',
            Card::Paranoia => 'P',
            Card::PrivateEye => 'I',
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hidden role assigned at the start of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    NotSet,
    Cultist,
    Investigator,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::NotSet => "Not set",
            Role::Cultist => "Cultist",
            Role::Investigator => "Investigator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
