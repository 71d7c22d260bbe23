use crate::domain::scoring::{apply_round_scoring, is_game_over, winning_team};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::make_round_end_state;

#[test]
fn make_exact_bid_scores_ten_per_trick() {
    // Team 0 bids 4 (2+2) and takes exactly 4; team 1 bids 4 and takes 9.
    let mut state = make_round_end_state([2, 2, 2, 2], [2, 5, 2, 4]);
    let summary = apply_round_scoring(&mut state).unwrap();

    assert_eq!(summary.team_bids, [4, 4]);
    assert_eq!(summary.team_tricks, [4, 9]);
    assert_eq!(state.scores[0], 40);
    assert_eq!(state.bags[0], 0);
}

#[test]
fn overtricks_score_one_point_each_and_become_bags() {
    let mut state = make_round_end_state([2, 2, 2, 2], [4, 3, 3, 3]);
    apply_round_scoring(&mut state).unwrap();

    // Team 0: bid 4, tricks 7 -> 40 + 3 overtricks
    assert_eq!(state.scores[0], 43);
    assert_eq!(state.bags[0], 3);
}

#[test]
fn bag_penalty_carries_the_remainder() {
    // Bid 4, tricks 7, pre-existing bags 8 -> +43, then -100,
    // bags 8 + 3 - 10 = 1.
    let mut state = make_round_end_state([2, 2, 2, 2], [4, 3, 3, 3]);
    state.bags[0] = 8;
    apply_round_scoring(&mut state).unwrap();

    assert_eq!(state.scores[0], 43 - 100);
    assert_eq!(state.bags[0], 1);
}

#[test]
fn set_team_loses_ten_per_bid_and_keeps_bags() {
    let mut state = make_round_end_state([3, 2, 3, 2], [1, 5, 1, 6]);
    state.bags[0] = 4;
    apply_round_scoring(&mut state).unwrap();

    // Team 0: bid 6, tricks 2 -> -60, bags untouched.
    assert_eq!(state.scores[0], -60);
    assert_eq!(state.bags[0], 4);
}

#[test]
fn nil_made_adds_hundred_on_top_of_team_math() {
    // Seat 0 bids nil and takes zero; partner covers 4 tricks against a bid of 4.
    let mut state = make_round_end_state([0, 2, 4, 2], [0, 5, 4, 4]);
    apply_round_scoring(&mut state).unwrap();

    // Team 0: bid 4, tricks 4 -> +40, plus nil bonus 100.
    assert_eq!(state.scores[0], 140);
}

#[test]
fn nil_broken_costs_hundred() {
    let mut state = make_round_end_state([0, 2, 4, 2], [1, 5, 4, 3]);
    apply_round_scoring(&mut state).unwrap();

    // Team 0: bid 4, tricks 5 -> +41, minus broken nil 100.
    assert_eq!(state.scores[0], 41 - 100);
    assert_eq!(state.bags[0], 1);
}

#[test]
fn blind_nil_doubles_the_stakes() {
    let mut made = make_round_end_state([0, 3, 4, 3], [0, 5, 4, 4]);
    made.round.blind_nil[0] = true;
    apply_round_scoring(&mut made).unwrap();
    assert_eq!(made.scores[0], 40 + 200);

    let mut broken = make_round_end_state([0, 3, 4, 3], [2, 4, 4, 3]);
    broken.round.blind_nil[0] = true;
    apply_round_scoring(&mut broken).unwrap();
    // Team 0: bid 4, tricks 6 -> +42, minus blind nil 200.
    assert_eq!(broken.scores[0], 42 - 200);
}

#[test]
fn scoring_requires_round_end_phase() {
    let mut state = make_round_end_state([2, 2, 2, 2], [4, 3, 3, 3]);
    state.phase = Phase::Playing;
    assert!(apply_round_scoring(&mut state).is_err());
}

#[test]
fn game_over_at_five_hundred() {
    assert!(!is_game_over(&[499, 120]));
    assert!(is_game_over(&[500, 120]));
    assert!(is_game_over(&[-80, 510]));
}

#[test]
fn winner_is_strictly_higher_team() {
    assert_eq!(winning_team(&[520, 480]), Some(0));
    assert_eq!(winning_team(&[480, 520]), Some(1));
    assert_eq!(winning_team(&[510, 510]), None, "ties play another round");
}
