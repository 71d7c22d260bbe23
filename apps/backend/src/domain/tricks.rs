use crate::domain::rules::{validate_play, PLAYERS};
use crate::domain::state::{next_seat, require_turn, GameState, Phase, Seat};
use crate::domain::{card_beats, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Whether this play exhausted the hands (13 tricks elapsed).
    pub round_complete: bool,
}

/// Play a card into the current trick, enforcing phase, turn, suit-following
/// and spade-breaking. A fourth play resolves the trick atomically: the
/// winner's tally is incremented, the trick is cleared, and the turn passes
/// to the winner. The thirteenth trick moves the round to `RoundEnd`.
pub fn play_card(
    state: &mut GameState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Not in playing phase",
        ));
    }

    let turn = require_turn(state, "play_card")?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    validate_play(
        &state.hands[seat as usize],
        card,
        state.round.trick_lead,
        state.round.spades_broken,
    )?;

    // On first play, set lead + leader
    if state.round.trick_plays.is_empty() {
        state.round.trick_lead = Some(card.suit);
        state.leader = Some(seat);
    }

    let hand = &mut state.hands[seat as usize];
    let pos = hand.iter().position(|&c| c == card).ok_or_else(|| {
        DomainError::validation(ValidationKind::CardNotInHand, "Card not in hand")
    })?;
    hand.remove(pos);

    if card.suit == Suit::Spades {
        state.round.spades_broken = true;
    }

    state.round.trick_plays.push((seat, card));
    state.turn = Some(next_seat(seat));

    let trick_completed = state.round.trick_plays.len() == PLAYERS;
    let mut result = PlayCardResult {
        trick_completed,
        trick_winner: None,
        round_complete: false,
    };

    if !trick_completed {
        return Ok(result);
    }

    let lead = state.round.trick_lead.ok_or_else(|| {
        DomainError::validation_other("Invariant violated: complete trick without a lead suit")
    })?;
    let winner = trick_winner(&state.round.trick_plays, lead);
    state.round.tricks_won[winner as usize] += 1;
    result.trick_winner = Some(winner);

    state.round.trick_plays.clear();
    state.round.trick_lead = None;
    state.leader = Some(winner);
    state.turn = Some(winner);

    if state.hands.iter().all(|h| h.is_empty()) {
        state.phase = Phase::RoundEnd;
        state.turn = None;
        state.leader = None;
        result.round_complete = true;
    }

    Ok(result)
}

/// Winner of a complete trick.
///
/// Any spade beats any non-spade; spades compare by rank among themselves;
/// otherwise the highest card of the lead suit wins. Ties cannot arise
/// because the deck holds each (rank, suit) exactly once.
pub fn trick_winner(plays: &[(Seat, Card)], lead: Suit) -> Seat {
    debug_assert_eq!(plays.len(), PLAYERS);
    let mut best = 0usize;
    for i in 1..plays.len() {
        if card_beats(plays[i].1, plays[best].1, lead) {
            best = i;
        }
    }
    plays[best].0
}
