//! Random bot - makes uniformly random legal moves.
//!
//! The seedable baseline used by tests and as a template for other
//! strategies: thread-safe interior mutability over the RNG, legal-subset
//! queries only, no panics.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{BotError, BotStrategy};
use crate::domain::{BotView, Card};

/// Bot that picks uniformly among legal options in every phase.
pub struct RandomBot {
    /// `BotStrategy` methods take `&self`, so the RNG lives behind a mutex.
    rng: Mutex<StdRng>,
}

impl RandomBot {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `seed` pins the RNG for reproducible games; `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl BotStrategy for RandomBot {
    fn choose_bid(&self, view: &BotView) -> Result<u8, BotError> {
        let legal_bids = view.legal_bids();
        if legal_bids.is_empty() {
            return Err(BotError::NoLegalMove("no legal bids available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| BotError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal_bids
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| BotError::Internal("failed to choose random bid".into()))
    }

    fn choose_play(&self, view: &BotView) -> Result<Card, BotError> {
        let legal_plays = view.legal_plays();
        if legal_plays.is_empty() {
            return Err(BotError::NoLegalMove("no legal plays available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| BotError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal_plays
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| BotError::Internal("failed to choose random card".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::parse_cards;
    use crate::domain::{GameState, Suit};

    fn view_with_hand(tokens: &[&str], lead: Option<Suit>) -> BotView {
        let mut state = GameState::new();
        state.hands[0] = parse_cards(tokens);
        state.round.trick_lead = lead;
        BotView::for_seat(&state, 0)
    }

    #[test]
    fn seeded_bot_is_deterministic() {
        let view = view_with_hand(&["2C", "5H", "9D", "AS"], None);
        let a = RandomBot::new(Some(99));
        let b = RandomBot::new(Some(99));
        for _ in 0..10 {
            assert_eq!(
                a.choose_play(&view).unwrap(),
                b.choose_play(&view).unwrap()
            );
        }
    }

    #[test]
    fn plays_only_legal_cards() {
        let view = view_with_hand(&["2H", "9H", "AS"], Some(Suit::Hearts));
        let bot = RandomBot::new(Some(1));
        for _ in 0..20 {
            let card = bot.choose_play(&view).unwrap();
            assert_eq!(card.suit, Suit::Hearts, "must follow hearts");
        }
    }

    #[test]
    fn bid_stays_in_range() {
        let view = view_with_hand(&["2C"], None);
        let bot = RandomBot::new(Some(5));
        for _ in 0..20 {
            assert!(bot.choose_bid(&view).unwrap() <= 13);
        }
    }
}
