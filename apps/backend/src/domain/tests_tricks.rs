use crate::domain::cards::parse_cards;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::tricks::{play_card, trick_winner};
use crate::domain::Suit;
use crate::errors::ErrorCode;

fn single_card_hands(tokens: [&str; 4]) -> [Vec<crate::domain::Card>; 4] {
    tokens.map(|t| parse_cards(&[t]))
}

#[test]
fn highest_spade_wins_regardless_of_rank() {
    // [(0,10♣),(1,A♣),(2,2♠),(3,3♠)], lead ♣ → seat 3
    let plays = vec![
        (0, parse_cards(&["TC"])[0]),
        (1, parse_cards(&["AC"])[0]),
        (2, parse_cards(&["2S"])[0]),
        (3, parse_cards(&["3S"])[0]),
    ];
    assert_eq!(trick_winner(&plays, Suit::Clubs), 3);
}

#[test]
fn highest_of_lead_suit_wins_without_spades() {
    let plays = vec![
        (0, parse_cards(&["TC"])[0]),
        (1, parse_cards(&["AC"])[0]),
        (2, parse_cards(&["AH"])[0]),
        (3, parse_cards(&["KC"])[0]),
    ];
    assert_eq!(trick_winner(&plays, Suit::Clubs), 1);
}

#[test]
fn first_play_establishes_lead_and_leader() {
    let mut state = make_game_state(
        single_card_hands(["5H", "2C", "2D", "2H"]),
        MakeGameStateArgs::default(),
    );
    let card = state.hands[0][0];
    let result = play_card(&mut state, 0, card).unwrap();
    assert!(!result.trick_completed);
    assert_eq!(state.round.trick_lead, Some(Suit::Hearts));
    assert_eq!(state.leader, Some(0));
    assert_eq!(state.turn, Some(1));
}

#[test]
fn complete_trick_resolves_and_winner_leads_next() {
    let mut state = make_game_state(
        [
            parse_cards(&["5H", "2C"]),
            parse_cards(&["AH", "3C"]),
            parse_cards(&["2H", "4C"]),
            parse_cards(&["3H", "5C"]),
        ],
        MakeGameStateArgs::default(),
    );

    for seat in 0..4u8 {
        let card = *state.hands[seat as usize]
            .iter()
            .find(|c| c.suit == Suit::Hearts)
            .unwrap();
        let result = play_card(&mut state, seat, card).unwrap();
        if seat < 3 {
            assert!(!result.trick_completed);
        } else {
            assert!(result.trick_completed);
            assert_eq!(result.trick_winner, Some(1), "ace of hearts wins");
        }
    }

    assert_eq!(state.round.tricks_won, [0, 1, 0, 0]);
    assert!(state.round.trick_plays.is_empty());
    assert_eq!(state.round.trick_lead, None);
    assert_eq!(state.turn, Some(1));
    assert_eq!(state.leader, Some(1));
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn last_trick_moves_round_to_round_end() {
    let mut state = make_game_state(
        single_card_hands(["5H", "AH", "2H", "3H"]),
        MakeGameStateArgs::default(),
    );

    for seat in 0..4u8 {
        let card = state.hands[seat as usize][0];
        let result = play_card(&mut state, seat, card).unwrap();
        if seat == 3 {
            assert!(result.round_complete);
        }
    }

    assert_eq!(state.phase, Phase::RoundEnd);
    assert_eq!(state.turn, None);
    assert_eq!(state.round.tricks_won.iter().sum::<u8>(), 1);
}

#[test]
fn playing_a_spade_breaks_spades() {
    let mut state = make_game_state(
        [
            parse_cards(&["5H"]),
            parse_cards(&["2S", "3C"]),
            parse_cards(&["2D"]),
            parse_cards(&["3D"]),
        ],
        MakeGameStateArgs::default(),
    );
    play_card(&mut state, 0, parse_cards(&["5H"])[0]).unwrap();
    assert!(!state.round.spades_broken);
    play_card(&mut state, 1, parse_cards(&["2S"])[0]).unwrap();
    assert!(state.round.spades_broken);
}

#[test]
fn out_of_turn_play_rejected_without_mutation() {
    let mut state = make_game_state(
        single_card_hands(["5H", "AH", "2H", "3H"]),
        MakeGameStateArgs::default(),
    );
    let before = state.clone();
    let card = state.hands[2][0];
    let err = play_card(&mut state, 2, card).unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::OutOfTurn);
    assert_eq!(state, before, "rejected play must not mutate state");
}

#[test]
fn illegal_play_rejected_without_mutation() {
    let mut state = make_game_state(
        [
            parse_cards(&["5H", "2C"]),
            parse_cards(&["AH", "2S"]),
            parse_cards(&["2H"]),
            parse_cards(&["3H"]),
        ],
        MakeGameStateArgs::default(),
    );
    play_card(&mut state, 0, parse_cards(&["5H"])[0]).unwrap();

    let before = state.clone();
    let err = play_card(&mut state, 1, parse_cards(&["2S"])[0]).unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::MustFollowSuit);
    assert_eq!(state, before);
}

#[test]
fn play_rejected_in_wrong_phase() {
    let mut state = make_game_state(
        single_card_hands(["5H", "AH", "2H", "3H"]),
        MakeGameStateArgs {
            phase: Phase::Bidding,
            ..Default::default()
        },
    );
    let card = state.hands[0][0];
    let err = play_card(&mut state, 0, card).unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::PhaseMismatch);
}
