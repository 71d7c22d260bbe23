//! Helpers for constructing game states in tests.

use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::Card;

pub struct MakeGameStateArgs {
    pub phase: Phase,
    pub round_no: u8,
    pub turn: Option<Seat>,
    pub leader: Option<Seat>,
}

impl Default for MakeGameStateArgs {
    fn default() -> Self {
        Self {
            phase: Phase::Playing,
            round_no: 1,
            turn: Some(0),
            leader: Some(0),
        }
    }
}

pub fn make_game_state(hands: [Vec<Card>; PLAYERS], args: MakeGameStateArgs) -> GameState {
    let mut state = GameState::new();
    state.hands = hands;
    state.phase = args.phase;
    state.round_no = args.round_no;
    state.turn = args.turn;
    state.leader = args.leader;
    state
}

/// State mid-round with all four bids placed (needed before scoring).
pub fn make_round_end_state(bids: [u8; PLAYERS], tricks_won: [u8; PLAYERS]) -> GameState {
    let mut state = make_game_state(
        Default::default(),
        MakeGameStateArgs {
            phase: Phase::RoundEnd,
            turn: None,
            leader: None,
            ..Default::default()
        },
    );
    state.round.bids = bids.map(Some);
    state.round.tricks_won = tricks_won;
    state
}
