//! Bid recording and the bidding → playing transition.

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of recording a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidResult {
    /// True once all four bids are present; the caller starts play.
    pub bidding_complete: bool,
}

/// Record a seat's bid. Blind nil forces an effective bid of 0.
///
/// Each seat bids exactly once per round; order between seats does not
/// affect legality. `turn` tracks the lowest seat still to bid so bot
/// scheduling has a well-defined "effective turn".
pub fn place_bid(
    state: &mut GameState,
    seat: Seat,
    bid: u8,
    blind_nil: bool,
) -> Result<BidResult, DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Not in bidding phase",
        ));
    }

    if state.round.bids[seat as usize].is_some() {
        return Err(DomainError::validation(
            ValidationKind::BidAlreadyPlaced,
            "Bid already placed this round",
        ));
    }

    if !valid_bid_range().contains(&bid) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("Bid must be in range {:?}", valid_bid_range()),
        ));
    }

    let effective = if blind_nil { 0 } else { bid };
    state.round.bids[seat as usize] = Some(effective);
    state.round.blind_nil[seat as usize] = blind_nil;

    state.turn = state
        .round
        .bids
        .iter()
        .position(|b| b.is_none())
        .map(|i| i as Seat);

    Ok(BidResult {
        bidding_complete: state.round.all_bids_placed(),
    })
}

/// Transition from Bidding to Playing once every bid is in.
///
/// The opening trick of a round is led by the holder of the 2 of Clubs.
pub fn start_play(state: &mut GameState) -> Result<Seat, DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Not in bidding phase",
        ));
    }
    if !state.round.all_bids_placed() {
        return Err(DomainError::validation_other(
            "Cannot start play before all bids are placed",
        ));
    }

    let two_of_clubs = Card {
        suit: Suit::Clubs,
        rank: Rank::Two,
    };
    let leader = state.holder_of(two_of_clubs).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: no hand holds the 2 of Clubs")
    })?;

    state.phase = Phase::Playing;
    state.leader = Some(leader);
    state.turn = Some(leader);
    Ok(leader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dealing::deal_hands;
    use crate::errors::ErrorCode;

    fn bidding_state() -> GameState {
        let mut state = GameState::new();
        state.reset_round(deal_hands(Some(7)));
        state
    }

    #[test]
    fn bids_recorded_and_turn_advances_to_lowest_unbid_seat() {
        let mut state = bidding_state();
        assert_eq!(state.turn, Some(0));

        place_bid(&mut state, 2, 4, false).unwrap();
        assert_eq!(state.round.bids[2], Some(4));
        assert_eq!(state.turn, Some(0), "seat 0 still owes a bid");

        place_bid(&mut state, 0, 3, false).unwrap();
        assert_eq!(state.turn, Some(1));
    }

    #[test]
    fn blind_nil_forces_zero() {
        let mut state = bidding_state();
        place_bid(&mut state, 1, 7, true).unwrap();
        assert_eq!(state.round.bids[1], Some(0));
        assert!(state.round.blind_nil[1]);
    }

    #[test]
    fn second_bid_rejected() {
        let mut state = bidding_state();
        place_bid(&mut state, 0, 3, false).unwrap();
        let err = place_bid(&mut state, 0, 4, false).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::BidAlreadyPlaced);
    }

    #[test]
    fn out_of_range_bid_rejected() {
        let mut state = bidding_state();
        let err = place_bid(&mut state, 0, 14, false).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidBid);
    }

    #[test]
    fn play_opens_with_two_of_clubs_holder() {
        let mut state = bidding_state();
        for seat in 0..4 {
            let result = place_bid(&mut state, seat, 3, false).unwrap();
            assert_eq!(result.bidding_complete, seat == 3);
        }
        let leader = start_play(&mut state).unwrap();
        let two_of_clubs = Card {
            suit: Suit::Clubs,
            rank: Rank::Two,
        };
        assert!(state.hands[leader as usize].contains(&two_of_clubs));
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.turn, Some(leader));
    }

    #[test]
    fn start_play_requires_all_bids() {
        let mut state = bidding_state();
        place_bid(&mut state, 0, 3, false).unwrap();
        assert!(start_play(&mut state).is_err());
    }
}
