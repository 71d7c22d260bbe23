//! Bot strategy trait definition.

use std::fmt;

use crate::domain::{BotView, Card};
use crate::error::AppError;

/// Errors that can occur during bot decision-making.
#[derive(Debug)]
pub enum BotError {
    /// Bot encountered an internal error
    Internal(String),
    /// Bot produced or found no legal move
    NoLegalMove(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Internal(msg) => write!(f, "bot internal error: {msg}"),
            BotError::NoLegalMove(msg) => write!(f, "bot has no legal move: {msg}"),
        }
    }
}

impl std::error::Error for BotError {}

impl From<BotError> for AppError {
    fn from(err: BotError) -> Self {
        AppError::internal(format!("Bot error: {err}"))
    }
}

/// Trait for automated seats.
///
/// Implementations receive the state visible to their seat and must choose a
/// legal action; `BotView::legal_plays()` is the supported way to stay legal.
/// The orchestrator validates every bot move through the same path as human
/// moves, so an illegal choice surfaces as an error rather than corrupting
/// the room.
pub trait BotStrategy: Send + Sync {
    /// Choose a bid in 0..=13.
    fn choose_bid(&self, view: &BotView) -> Result<u8, BotError>;

    /// Choose a card to play from the legal subset of the hand.
    fn choose_play(&self, view: &BotView) -> Result<Card, BotError>;
}
