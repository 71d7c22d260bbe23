//! Structural and rule validations at the orchestrator boundary: every
//! rejected action must leave the room untouched.

mod support;

use backend::domain::Phase;
use backend::errors::ErrorCode;
use backend::AppError;
use support::{game_state, test_flow};
use uuid::Uuid;

fn code_of(err: AppError) -> ErrorCode {
    err.code()
}

#[tokio::test]
async fn join_unknown_room_is_rejected() {
    let flow = test_flow();
    let err = flow.join_game("NOSUCH", "alice", None).unwrap_err();
    assert_eq!(code_of(err), ErrorCode::RoomNotFound);
}

#[tokio::test]
async fn join_full_room_is_rejected() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    for name in ["b", "c", "d"] {
        flow.join_game(&host.room_id, name, None).unwrap();
    }
    let err = flow.join_game(&host.room_id, "late", None).unwrap_err();
    assert_eq!(code_of(err), ErrorCode::RoomFull);
}

#[tokio::test]
async fn join_after_start_is_rejected() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    flow.start_game(&host.room_id, host.player_id).unwrap();
    let err = flow.join_game(&host.room_id, "late", None).unwrap_err();
    assert_eq!(code_of(err), ErrorCode::GameAlreadyStarted);
}

#[tokio::test]
async fn only_creator_may_start() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    let guest = flow.join_game(&host.room_id, "guest", None).unwrap();

    let err = flow
        .start_game(&host.room_id, guest.player_id)
        .unwrap_err();
    assert_eq!(code_of(err), ErrorCode::NotCreator);

    flow.start_game(&host.room_id, host.player_id).unwrap();
    let err = flow.start_game(&host.room_id, host.player_id).unwrap_err();
    assert_eq!(code_of(err), ErrorCode::GameAlreadyStarted);
}

#[tokio::test]
async fn bid_validations() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    flow.start_game(&host.room_id, host.player_id).unwrap();

    let err = flow
        .submit_bid(&host.room_id, host.player_id, 14, false)
        .unwrap_err();
    assert_eq!(code_of(err), ErrorCode::InvalidBid);

    flow.submit_bid(&host.room_id, host.player_id, 4, false)
        .unwrap();
    let err = flow
        .submit_bid(&host.room_id, host.player_id, 4, false)
        .unwrap_err();
    assert_eq!(code_of(err), ErrorCode::BidAlreadyPlaced);
}

#[tokio::test]
async fn blind_nil_forces_zero_bid() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    flow.start_game(&host.room_id, host.player_id).unwrap();

    flow.submit_bid(&host.room_id, host.player_id, 7, true)
        .unwrap();
    let state = game_state(&flow, &host.room_id);
    assert_eq!(state.round.bids[0], Some(0));
    assert!(state.round.blind_nil[0]);
}

#[tokio::test]
async fn unknown_player_is_rejected() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    flow.start_game(&host.room_id, host.player_id).unwrap();

    let err = flow
        .submit_bid(&host.room_id, Uuid::new_v4(), 3, false)
        .unwrap_err();
    assert_eq!(code_of(err), ErrorCode::PlayerNotFound);
}

#[tokio::test]
async fn rejected_actions_leave_the_room_unchanged() {
    let flow = test_flow();
    let host = flow.create_game("host", None).unwrap();
    flow.start_game(&host.room_id, host.player_id).unwrap();

    // Finish bidding so the room is in Playing.
    flow.submit_bid(&host.room_id, host.player_id, 3, false)
        .unwrap();
    while game_state(&flow, &host.room_id).phase == Phase::Bidding {
        assert!(flow.run_scheduled_step(&host.room_id, None));
    }

    let before = game_state(&flow, &host.room_id);
    assert_eq!(before.phase, Phase::Playing);

    // Out-of-phase bid.
    let err = flow
        .submit_bid(&host.room_id, host.player_id, 3, false)
        .unwrap_err();
    assert_eq!(code_of(err), ErrorCode::PhaseMismatch);
    assert_eq!(game_state(&flow, &host.room_id), before);

    // Out-of-turn or illegal play from the human seat.
    let turn = before.turn.unwrap();
    if turn == 0 {
        // Find a card that is in hand but not legal right now, if any.
        let legal = backend::domain::rules::legal_plays(
            &before.hands[0],
            before.round.trick_lead,
            before.round.spades_broken,
        );
        if let Some(&illegal) = before.hands[0].iter().find(|c| !legal.contains(c)) {
            let err = flow
                .play_card(&host.room_id, host.player_id, illegal)
                .unwrap_err();
            assert!(matches!(
                code_of(err),
                ErrorCode::MustFollowSuit | ErrorCode::CannotLeadSpades
            ));
            assert_eq!(game_state(&flow, &host.room_id), before);
        }
    } else {
        let card = before.hands[0][0];
        let err = flow
            .play_card(&host.room_id, host.player_id, card)
            .unwrap_err();
        assert_eq!(code_of(err), ErrorCode::OutOfTurn);
        assert_eq!(game_state(&flow, &host.room_id), before);
    }

    // A card the player does not hold.
    let foreign = before.hands[1][0];
    let err = flow
        .play_card(&host.room_id, host.player_id, foreign)
        .unwrap_err();
    assert!(matches!(
        code_of(err),
        ErrorCode::CardNotInHand | ErrorCode::OutOfTurn
    ));
    assert_eq!(game_state(&flow, &host.room_id), before);
}
