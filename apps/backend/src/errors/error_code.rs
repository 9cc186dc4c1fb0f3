//! Error codes for the lovecraft game crate.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and are stable across releases so
//! callers can branch on them.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lifecycle
    /// Command not allowed in the game's current state
    PhaseMismatch,
    /// The final round has already been reached
    RoundLimitReached,

    // Arguments
    /// Card number outside the target's hand
    CardNumberOutOfRange,
    /// Player count not covered by the setup table
    InvalidPlayerCount,
    /// Role pool exhausted during assignment
    RolesExhausted,
    /// Game options cannot produce a valid deck
    InvalidOptions,
    /// Parse card error
    ParseCard,
    /// General validation error
    ValidationError,

    // Turn order
    /// Out of turn
    OutOfTurn,
    /// A player tried to investigate themselves
    SelfInvestigation,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// A game with this id already exists
    GameExists,
    /// The player is already part of the game
    PlayerAlreadyJoined,
    /// General conflict
    Conflict,

    // System Errors
    /// Store cannot be reached
    StoreUnavailable,
    /// Stored data is not a valid game
    DataCorruption,
    /// Internal error
    InternalError,
    /// Invalid configuration
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::RoundLimitReached => "ROUND_LIMIT_REACHED",

            Self::CardNumberOutOfRange => "CARD_NUMBER_OUT_OF_RANGE",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::RolesExhausted => "ROLES_EXHAUSTED",
            Self::InvalidOptions => "INVALID_OPTIONS",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::OutOfTurn => "OUT_OF_TURN",
            Self::SelfInvestigation => "SELF_INVESTIGATION",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameExists => "GAME_EXISTS",
            Self::PlayerAlreadyJoined => "PLAYER_ALREADY_JOINED",
            Self::Conflict => "CONFLICT",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
