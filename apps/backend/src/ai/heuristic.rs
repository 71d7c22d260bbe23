//! Heuristic bot - counts high cards to bid, plays randomly among legal cards.
//!
//! Bidding weights: a spade at queen or better is worth a full trick, any
//! other spade half a trick, and high cards (queen+) in side suits half a
//! trick. The rounded estimate is clamped to 1..=6 so the bot neither nils
//! nor overreaches.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{BotError, BotStrategy};
use crate::domain::{rank_value, BotView, Card, Suit};

pub struct HeuristicBot {
    rng: Mutex<StdRng>,
}

impl HeuristicBot {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    const MIN_BID: u8 = 1;
    const MAX_BID: u8 = 6;

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn estimate_tricks(hand: &[Card]) -> f32 {
        let mut estimate = 0.0f32;
        for card in hand {
            let value = rank_value(card.rank);
            if card.suit == Suit::Spades {
                estimate += if value >= 12 { 1.0 } else { 0.5 };
            } else if value >= 12 {
                estimate += 0.5;
            }
        }
        estimate
    }
}

impl BotStrategy for HeuristicBot {
    fn choose_bid(&self, view: &BotView) -> Result<u8, BotError> {
        let estimate = Self::estimate_tricks(&view.hand).round() as u8;
        Ok(estimate.clamp(Self::MIN_BID, Self::MAX_BID))
    }

    fn choose_play(&self, view: &BotView) -> Result<Card, BotError> {
        let legal_plays = view.legal_plays();

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| BotError::Internal(format!("RNG lock poisoned: {e}")))?;

        // A correctly maintained hand always has a legal play; fall back to
        // the first card rather than stalling the room if that ever breaks.
        legal_plays
            .choose(&mut *rng)
            .or(view.hand.first())
            .copied()
            .ok_or_else(|| BotError::NoLegalMove("hand is empty".into()))
    }
}
