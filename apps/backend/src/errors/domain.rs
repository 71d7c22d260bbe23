//! Domain-level error type used across the rules engine and services.
//!
//! This error type is transport-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Rule and input validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    MustFollowSuit,
    CannotLeadSpades,
    OutOfTurn,
    CardNotInHand,
    InvalidBid,
    BidAlreadyPlaced,
    PhaseMismatch,
    ParseCard,
    NotCreator,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Player,
    Other(String),
}

/// Domain-level conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    RoomFull,
    GameAlreadyStarted,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input/user validation or rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// Wire-level error code for this domain failure.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::MustFollowSuit => ErrorCode::MustFollowSuit,
                ValidationKind::CannotLeadSpades => ErrorCode::CannotLeadSpades,
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                ValidationKind::BidAlreadyPlaced => ErrorCode::BidAlreadyPlaced,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::NotCreator => ErrorCode::NotCreator,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::RoomFull => ErrorCode::RoomFull,
                ConflictKind::GameAlreadyStarted => ErrorCode::GameAlreadyStarted,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Room => ErrorCode::RoomNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
        }
    }
}
