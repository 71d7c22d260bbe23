//! Spades rule constants and the pure legal-move checks.

use std::ops::RangeInclusive;

use crate::domain::cards::{hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const HAND_SIZE: usize = 13;
pub const WINNING_SCORE: i32 = 500;
pub const BAG_LIMIT: u8 = 10;
pub const BAG_PENALTY: i32 = 100;
pub const NIL_BONUS: i32 = 100;
pub const BLIND_NIL_BONUS: i32 = 200;

/// Fixed partnerships: seats 0 & 2 are team 0, seats 1 & 3 are team 1.
#[inline]
pub fn team_of(seat: u8) -> usize {
    (seat % 2) as usize
}

pub fn valid_bid_range() -> RangeInclusive<u8> {
    0..=HAND_SIZE as u8
}

/// Validate a single play against suit-following and spade-breaking rules.
///
/// `lead` is the suit of the first card in the current trick, `None` when
/// this play opens the trick. A hand holding only spades may lead spades
/// even while they are unbroken.
pub fn validate_play(
    hand: &[Card],
    card: Card,
    lead: Option<Suit>,
    spades_broken: bool,
) -> Result<(), DomainError> {
    if !hand.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    }

    if let Some(lead) = lead {
        if card.suit != lead && hand_has_suit(hand, lead) {
            return Err(DomainError::validation(
                ValidationKind::MustFollowSuit,
                "Must follow suit",
            ));
        }
        return Ok(());
    }

    if card.suit == Suit::Spades && !spades_broken && hand.iter().any(|c| c.suit != Suit::Spades) {
        return Err(DomainError::validation(
            ValidationKind::CannotLeadSpades,
            "Cannot lead spades until broken",
        ));
    }

    Ok(())
}

/// The subset of `hand` that `validate_play` would accept.
pub fn legal_plays(hand: &[Card], lead: Option<Suit>, spades_broken: bool) -> Vec<Card> {
    let mut v: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&c| validate_play(hand, c, lead, spades_broken).is_ok())
        .collect();
    v.sort();
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::parse_cards;
    use crate::errors::ErrorCode;

    fn code_of(res: Result<(), DomainError>) -> Option<ErrorCode> {
        res.err().map(|e| e.error_code())
    }

    #[test]
    fn must_follow_suit_when_able() {
        let hand = parse_cards(&["2S", "5H"]);
        assert_eq!(
            code_of(validate_play(&hand, hand[0], Some(Suit::Hearts), false)),
            Some(ErrorCode::MustFollowSuit)
        );
        assert!(validate_play(&hand, hand[1], Some(Suit::Hearts), false).is_ok());
    }

    #[test]
    fn void_in_lead_suit_frees_the_hand() {
        let hand = parse_cards(&["2S", "5D"]);
        assert!(validate_play(&hand, hand[0], Some(Suit::Hearts), false).is_ok());
        assert!(validate_play(&hand, hand[1], Some(Suit::Hearts), false).is_ok());
    }

    #[test]
    fn cannot_lead_spades_until_broken() {
        let hand = parse_cards(&["AS", "3H"]);
        assert_eq!(
            code_of(validate_play(&hand, hand[0], None, false)),
            Some(ErrorCode::CannotLeadSpades)
        );
        assert!(validate_play(&hand, hand[0], None, true).is_ok());
    }

    #[test]
    fn all_spade_hand_may_lead_spades() {
        let hand = parse_cards(&["AS", "2S"]);
        assert!(validate_play(&hand, hand[0], None, false).is_ok());
    }

    #[test]
    fn card_must_come_from_hand() {
        let hand = parse_cards(&["2C"]);
        let foreign = parse_cards(&["3C"])[0];
        assert_eq!(
            code_of(validate_play(&hand, foreign, None, false)),
            Some(ErrorCode::CardNotInHand)
        );
    }

    #[test]
    fn legal_plays_matches_validate_play() {
        let hand = parse_cards(&["2S", "9S", "5H", "KD"]);
        let legal = legal_plays(&hand, Some(Suit::Hearts), false);
        assert_eq!(legal, parse_cards(&["5H"]));

        let open = legal_plays(&hand, None, false);
        assert_eq!(open, parse_cards(&["KD", "5H"]), "spades excluded on open lead");
    }

    #[test]
    fn team_assignment_is_fixed() {
        assert_eq!(team_of(0), 0);
        assert_eq!(team_of(1), 1);
        assert_eq!(team_of(2), 0);
        assert_eq!(team_of(3), 1);
    }
}
