use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::actions::Action;
use crate::domain::rules::MAX_ROUNDS;
use crate::domain::{Card, Role};
use crate::errors::domain::{DomainError, NotFoundKind};

pub type GameId = String;
pub type PlayerId = String;

/// Overall game lifecycle states.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Created; players may still join.
    NotStarted,
    /// Roles assigned and cards dealt.
    InProgress,
    /// Waiting for an explicit next-round command.
    Paused,
    InvestigatorsWon,
    CultistsWon,
}

impl GameState {
    pub const fn label(self) -> &'static str {
        match self {
            GameState::NotStarted => "Not Started",
            GameState::InProgress => "In Progress",
            GameState::Paused => "Paused",
            GameState::InvestigatorsWon => "Investigators Win",
            GameState::CultistsWon => "Cultists Win",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, GameState::InvestigatorsWon | GameState::CultistsWon)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Options configurable before the game starts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    pub special_card_count: usize,
    pub cthulhu_count: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            special_card_count: 0,
            cthulhu_count: 1,
        }
    }
}

/// Knowledge a player gained through a card effect.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Secret {
    /// Holds for the rest of the game.
    Role { player: PlayerId, role: Role },
    /// Only meaningful until the next redeal.
    #[serde(rename_all = "camelCase")]
    Card {
        player: PlayerId,
        card: Card,
        card_number: usize,
    },
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub role: Role,
    pub hand: Vec<Card>,
    pub secrets: Vec<Secret>,
}

impl Player {
    /// A freshly joined player: no role, no cards, no secrets.
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            role: Role::NotSet,
            hand: Vec::new(),
            secrets: Vec::new(),
        }
    }
}

/// The aggregate root: everything known about a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    /// 1-based, never above [`MAX_ROUNDS`].
    pub round: u8,
    /// Join order; iteration and dealing follow it.
    pub player_list: Vec<Player>,
    pub current_investigator_id: Option<PlayerId>,
    /// Every card revealed so far, in reveal order.
    pub visible_cards: Vec<Card>,
    /// Cards removed from play until the next redeal.
    pub discards: Vec<Card>,
    pub paranoid_player_id: Option<PlayerId>,
    pub state: GameState,
    pub options: GameOptions,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    pub history: Vec<Action>,
}

impl Game {
    /// A game nobody has joined yet.
    pub fn new(id: impl Into<GameId>, options: GameOptions, created: OffsetDateTime) -> Self {
        Self {
            id: id.into(),
            round: 1,
            player_list: Vec::new(),
            current_investigator_id: None,
            visible_cards: Vec::new(),
            discards: Vec::new(),
            paranoid_player_id: None,
            state: GameState::NotStarted,
            options,
            created,
            history: Vec::new(),
        }
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.player_list.iter().find(|p| p.id == player_id)
    }

    pub fn player_index(&self, player_id: &str) -> Option<usize> {
        self.player_list.iter().position(|p| p.id == player_id)
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.player_index(player_id).is_some()
    }

    /// Look up a player or fail with a not-found error.
    pub fn require_player(&self, player_id: &str) -> Result<&Player, DomainError> {
        self.player(player_id)
            .ok_or_else(|| missing_player(&self.id, player_id))
    }

    pub fn require_player_index(&self, player_id: &str) -> Result<usize, DomainError> {
        self.player_index(player_id)
            .ok_or_else(|| missing_player(&self.id, player_id))
    }

    pub fn visible_elder_signs(&self) -> usize {
        self.visible_cards
            .iter()
            .filter(|c| **c == Card::ElderSign)
            .count()
    }

    pub fn cards_in_hands(&self) -> usize {
        self.player_list.iter().map(|p| p.hand.len()).sum()
    }

    /// Cards in hands, on the table, and in the discard pile.
    pub fn total_cards(&self) -> usize {
        self.cards_in_hands() + self.visible_cards.len() + self.discards.len()
    }

    /// True when every player has had exactly one card revealed since the
    /// last boundary.
    pub fn is_round_boundary(&self) -> bool {
        !self.player_list.is_empty()
            && !self.visible_cards.is_empty()
            && self.visible_cards.len() % self.player_list.len() == 0
    }

    pub fn is_final_round(&self) -> bool {
        self.round >= MAX_ROUNDS
    }
}

fn missing_player(game_id: &str, player_id: &str) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Player,
        format!("No player with ID {player_id} in game {game_id}"),
    )
}

/// Unwrap the game a reducer was handed, or fail with a not-found error.
pub fn require_game(game: Option<Game>, game_id: &str) -> Result<Game, DomainError> {
    game.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("No game {game_id} exists."))
    })
}
