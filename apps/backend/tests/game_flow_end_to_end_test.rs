//! End-to-end orchestration: one human plus three bots from lobby to game
//! over, driven through the same scheduled-step path production uses.

mod support;

use backend::domain::rules::WINNING_SCORE;
use backend::domain::Phase;
use support::{drive_to_completion, game_state, test_flow};

#[tokio::test]
async fn bot_filled_game_runs_to_completion() {
    let flow = test_flow();
    let assignment = flow.create_game("host", None).unwrap();
    flow.start_game(&assignment.room_id, assignment.player_id)
        .unwrap();

    {
        let state = game_state(&flow, &assignment.room_id);
        assert_eq!(state.phase, Phase::Bidding);
        assert_eq!(state.round_no, 1);
        for hand in &state.hands {
            assert_eq!(hand.len(), 13);
        }
    }

    drive_to_completion(&flow, &assignment.room_id, assignment.player_id);

    let state = game_state(&flow, &assignment.room_id);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.turn, None);
    assert!(
        state.scores.iter().any(|&s| s >= WINNING_SCORE),
        "a team must have crossed the target: {:?}",
        state.scores
    );
    assert_ne!(
        state.scores[0], state.scores[1],
        "game over declares an outright winner"
    );
}

#[tokio::test]
async fn fourth_join_starts_bidding_automatically() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    for name in ["b", "c"] {
        flow.join_game(&host.room_id, name, None).unwrap();
    }
    assert_eq!(game_state(&flow, &host.room_id).phase, Phase::Lobby);

    flow.join_game(&host.room_id, "d", None).unwrap();
    let state = game_state(&flow, &host.room_id);
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.turn, Some(0));
}

#[tokio::test]
async fn tricks_per_round_sum_to_thirteen() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    flow.start_game(&host.room_id, host.player_id).unwrap();

    // Bid for the human, then let the bots finish bidding.
    flow.submit_bid(&host.room_id, host.player_id, 3, false)
        .unwrap();
    while game_state(&flow, &host.room_id).phase == Phase::Bidding {
        assert!(flow.run_scheduled_step(&host.room_id, None));
    }

    // Play out exactly one round.
    loop {
        let state = game_state(&flow, &host.room_id);
        match state.phase {
            Phase::Playing if state.turn == Some(0) => {
                let legal = backend::domain::rules::legal_plays(
                    &state.hands[0],
                    state.round.trick_lead,
                    state.round.spades_broken,
                );
                flow.play_card(&host.room_id, host.player_id, legal[0])
                    .unwrap();
            }
            Phase::Playing => {
                assert!(flow.run_scheduled_step(&host.room_id, None));
            }
            Phase::RoundEnd => break,
            other => panic!("unexpected phase {other:?}"),
        }
    }

    let state = game_state(&flow, &host.room_id);
    assert_eq!(state.round.tricks_won.iter().sum::<u8>(), 13);
    assert!(state.hands.iter().all(|h| h.is_empty()));
}
