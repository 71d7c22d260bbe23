//! Per-seat views of the game state.
//!
//! Bots and clients never receive a live hand reference; the orchestrator
//! builds an owned view for exactly one seat.

use crate::domain::rules::{legal_plays, valid_bid_range, PLAYERS};
use crate::domain::state::{GameState, Seat};
use crate::domain::{Card, Suit};

/// What a single seat is allowed to see when deciding a bid or a play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotView {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub lead: Option<Suit>,
    pub spades_broken: bool,
    pub bids: [Option<u8>; PLAYERS],
    pub tricks_won: [u8; PLAYERS],
}

impl BotView {
    pub fn for_seat(state: &GameState, seat: Seat) -> Self {
        Self {
            seat,
            hand: state.hands[seat as usize].clone(),
            lead: state.round.trick_lead,
            spades_broken: state.round.spades_broken,
            bids: state.round.bids,
            tricks_won: state.round.tricks_won,
        }
    }

    /// Legal bid values for this seat.
    pub fn legal_bids(&self) -> Vec<u8> {
        valid_bid_range().collect()
    }

    /// Legal cards for this seat given the current trick.
    pub fn legal_plays(&self) -> Vec<Card> {
        legal_plays(&self.hand, self.lead, self.spades_broken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::parse_cards;

    #[test]
    fn view_owns_its_hand() {
        let mut state = GameState::new();
        state.hands[1] = parse_cards(&["2C", "AH"]);
        let view = BotView::for_seat(&state, 1);
        state.hands[1].clear();
        assert_eq!(view.hand.len(), 2);
    }

    #[test]
    fn legal_bids_cover_zero_to_thirteen() {
        let state = GameState::new();
        let view = BotView::for_seat(&state, 0);
        assert_eq!(view.legal_bids(), (0..=13).collect::<Vec<_>>());
    }
}
