//! Domain-level error type produced by the reducers and the store.
//!
//! This error type is storage- and transport-agnostic. The facade returns
//! `Result<T, crate::error::AppError>` and converts from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Infra error kinds to distinguish operational failures of the store
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    DataCorruption,
    Other(String),
}

/// Entities a command can reference that may not exist
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Other(String),
}

/// Things that already exist when a command expects them not to
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    GameExists,
    PlayerAlreadyJoined,
    Other(String),
}

/// Rule violations raised by the reducers
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Command issued while the game is in the wrong lifecycle state
    PhaseMismatch,
    /// Next round requested after the final round
    RoundLimitReached,
    /// Card number outside `1..=hand.len()`
    CardNumberOutOfRange,
    /// Player count outside the setup table
    InvalidPlayerCount,
    /// Role pool ran dry while assigning roles
    RolesExhausted,
    /// Options that cannot produce a valid starting deck
    InvalidOptions,
    /// Card letter could not be parsed
    ParseCard,
    /// Source player is not the current investigator
    OutOfTurn,
    /// Source and target are the same player
    SelfInvestigation,
    Other(String),
}

/// Coarse classification of every failure a command can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NotFound,
    AlreadyExists,
    InvalidState,
    InvalidArgument,
    TurnViolation,
    Infra,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Human-readable message without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d)
            | DomainError::Conflict(_, d)
            | DomainError::NotFound(_, d)
            | DomainError::Infra(_, d) => d,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DomainError::NotFound(..) => ErrorCategory::NotFound,
            DomainError::Conflict(..) => ErrorCategory::AlreadyExists,
            DomainError::Infra(..) => ErrorCategory::Infra,
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PhaseMismatch | ValidationKind::RoundLimitReached => {
                    ErrorCategory::InvalidState
                }
                ValidationKind::OutOfTurn | ValidationKind::SelfInvestigation => {
                    ErrorCategory::TurnViolation
                }
                ValidationKind::CardNumberOutOfRange
                | ValidationKind::InvalidPlayerCount
                | ValidationKind::RolesExhausted
                | ValidationKind::InvalidOptions
                | ValidationKind::ParseCard
                | ValidationKind::Other(_) => ErrorCategory::InvalidArgument,
            },
        }
    }

    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::RoundLimitReached => ErrorCode::RoundLimitReached,
                ValidationKind::CardNumberOutOfRange => ErrorCode::CardNumberOutOfRange,
                ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
                ValidationKind::RolesExhausted => ErrorCode::RolesExhausted,
                ValidationKind::InvalidOptions => ErrorCode::InvalidOptions,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::SelfInvestigation => ErrorCode::SelfInvestigation,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::GameExists => ErrorCode::GameExists,
                ConflictKind::PlayerAlreadyJoined => ErrorCode::PlayerAlreadyJoined,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::StoreUnavailable => ErrorCode::StoreUnavailable,
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::Other(_) => ErrorCode::InternalError,
            },
        }
    }
}
