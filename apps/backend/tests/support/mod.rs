//! Shared helpers for game-flow integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use backend::config::GameConfig;
use backend::domain::rules::legal_plays;
use backend::domain::{GameState, Phase};
use backend::services::game_flow::GameFlowService;
use uuid::Uuid;

#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}

pub fn test_flow() -> Arc<GameFlowService> {
    GameFlowService::new(GameConfig::for_tests())
}

/// Snapshot of a room's game state for before/after comparisons.
pub fn game_state(flow: &Arc<GameFlowService>, room_id: &str) -> GameState {
    flow.rooms()
        .get(room_id)
        .expect("room exists")
        .lock()
        .game
        .clone()
}

/// Drive every pending automated step and the human seat until the game
/// completes. The human bids a flat 3 and plays the first legal card.
pub fn drive_to_completion(flow: &Arc<GameFlowService>, room_id: &str, human: Uuid) {
    const MAX_STEPS: usize = 50_000;

    for _ in 0..MAX_STEPS {
        if flow.run_scheduled_step(room_id, None) {
            continue;
        }

        let state = game_state(flow, room_id);
        match state.phase {
            Phase::GameOver => return,
            Phase::Bidding if state.round.bids[0].is_none() => {
                flow.submit_bid(room_id, human, 3, false)
                    .expect("human bid is legal");
            }
            Phase::Playing if state.turn == Some(0) => {
                let legal = legal_plays(
                    &state.hands[0],
                    state.round.trick_lead,
                    state.round.spades_broken,
                );
                let card = *legal.first().expect("human always has a legal play");
                flow.play_card(room_id, human, card)
                    .expect("chosen play is legal");
            }
            other => panic!("room stalled in phase {other:?}"),
        }
    }
    panic!("game did not complete within {MAX_STEPS} steps");
}
