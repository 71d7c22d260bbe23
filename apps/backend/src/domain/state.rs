use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Seat index, 0..=3. Seats 0 & 2 form one partnership, 1 & 3 the other.
pub type Seat = u8;

/// Room progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for four seats to fill.
    Lobby,
    /// Hands dealt, seats submit bids.
    Bidding,
    /// Tricks are played; `turn` points at the acting seat.
    Playing,
    /// Thirteen tricks done, awaiting scoring and the next round.
    RoundEnd,
    /// Terminal; no further actions accepted.
    GameOver,
}

/// Per-round state, reset at the start of every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Ordered plays for the current trick (seat, card).
    pub trick_plays: Vec<(Seat, Card)>,
    /// Lead suit for the current trick.
    pub trick_lead: Option<Suit>,
    /// Tricks won per seat this round.
    pub tricks_won: [u8; PLAYERS],
    /// Bids per seat; blind nil is recorded as a bid of 0 with the flag set.
    pub bids: [Option<u8>; PLAYERS],
    /// Blind-nil declarations per seat.
    pub blind_nil: [bool; PLAYERS],
    /// Whether a spade has been played this round.
    pub spades_broken: bool,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            trick_plays: Vec::with_capacity(PLAYERS),
            trick_lead: None,
            tricks_won: [0; PLAYERS],
            bids: [None; PLAYERS],
            blind_nil: [false; PLAYERS],
            spades_broken: false,
        }
    }

    pub fn all_bids_placed(&self) -> bool {
        self.bids.iter().all(|b| b.is_some())
    }
}

/// Entire game container for one room, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Round number, 1-based; 0 before the first deal.
    pub round_no: u8,
    /// Hands per seat.
    pub hands: [Vec<Card>; PLAYERS],
    /// Seat whose action is expected next.
    /// - Some(seat) when someone is expected to act
    /// - None when nobody can act (Lobby, RoundEnd, GameOver)
    pub turn: Option<Seat>,
    /// Seat that leads the current trick (only meaningful in Playing).
    pub leader: Option<Seat>,
    /// Cumulative team scores.
    pub scores: [i32; TEAMS],
    /// Accumulated team bags.
    pub bags: [u8; TEAMS],
    /// Per-round container.
    pub round: RoundState,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Lobby,
            round_no: 0,
            hands: Default::default(),
            turn: None,
            leader: None,
            scores: [0; TEAMS],
            bags: [0; TEAMS],
            round: RoundState::empty(),
        }
    }

    /// Reset per-round fields for a fresh deal. Scores and bags persist.
    pub fn reset_round(&mut self, hands: [Vec<Card>; PLAYERS]) {
        self.round_no += 1;
        self.hands = hands;
        self.round = RoundState::empty();
        self.phase = Phase::Bidding;
        self.leader = None;
        self.turn = Some(0);
    }

    /// Seat holding a specific card, if any hand contains it.
    pub fn holder_of(&self, card: Card) -> Option<Seat> {
        self.hands
            .iter()
            .position(|h| h.contains(&card))
            .map(|i| i as Seat)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % PLAYERS as Seat
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state.turn.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: turn must be set ({ctx})"))
    })
}

pub fn require_leader(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state.leader.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: leader must be set ({ctx})"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_rotation_wraps() {
        assert_eq!(next_seat(0), 1);
        assert_eq!(next_seat(3), 0);
    }

    #[test]
    fn reset_round_clears_round_state_but_keeps_scores() {
        let mut state = GameState::new();
        state.scores = [120, -40];
        state.bags = [3, 1];
        state.round.spades_broken = true;
        state.round.bids = [Some(3); 4];

        state.reset_round(Default::default());

        assert_eq!(state.round_no, 1);
        assert_eq!(state.phase, Phase::Bidding);
        assert!(!state.round.spades_broken);
        assert_eq!(state.round.bids, [None; 4]);
        assert_eq!(state.scores, [120, -40]);
        assert_eq!(state.bags, [3, 1]);
    }
}
