//! Error codes for the Spades backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear on the wire.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Centralized error codes for the Spades backend.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in `errorMessage` payloads and HTTP problem responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Request validation
    /// Must follow the lead suit
    MustFollowSuit,
    /// Spades cannot be led until broken
    CannotLeadSpades,
    /// Acting out of turn
    OutOfTurn,
    /// Card not in hand
    CardNotInHand,
    /// Bid outside the 0..=13 range
    InvalidBid,
    /// Seat already has a bid this round
    BidAlreadyPlaced,
    /// Action does not match the room phase
    PhaseMismatch,
    /// Card token failed to parse
    ParseCard,
    /// Only the room creator may start the game
    NotCreator,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Room not found
    RoomNotFound,
    /// Player not found in the room
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Business logic conflicts
    /// Room already has four seated players
    RoomFull,
    /// Room has left the lobby phase
    GameAlreadyStarted,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System errors
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical wire string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MustFollowSuit => "MUST_FOLLOW_SUIT",
            ErrorCode::CannotLeadSpades => "CANNOT_LEAD_SPADES",
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::CardNotInHand => "CARD_NOT_IN_HAND",
            ErrorCode::InvalidBid => "INVALID_BID",
            ErrorCode::BidAlreadyPlaced => "BID_ALREADY_PLACED",
            ErrorCode::PhaseMismatch => "PHASE_MISMATCH",
            ErrorCode::ParseCard => "PARSE_CARD",
            ErrorCode::NotCreator => "NOT_CREATOR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::RoomFull => "ROOM_FULL",
            ErrorCode::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
