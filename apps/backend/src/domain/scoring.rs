//! Round scoring: team make/set math, bags, nil and blind nil.

use crate::domain::rules::{
    team_of, BAG_LIMIT, BAG_PENALTY, BLIND_NIL_BONUS, NIL_BONUS, PLAYERS, TEAMS, WINNING_SCORE,
};
use crate::domain::state::{GameState, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// Summary of a scored round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub team_bids: [u8; TEAMS],
    pub team_tricks: [u8; TEAMS],
    /// Score delta applied to each team this round.
    pub deltas: [i32; TEAMS],
}

/// Apply round scoring to the game's cumulative scores and bags.
///
/// Team math first: making the combined bid scores `bid*10` plus one point
/// per overtrick, and each overtrick becomes a bag; a set team loses
/// `bid*10`. Reaching `BAG_LIMIT` bags costs `BAG_PENALTY` and removes ten
/// bags, carrying any remainder. Nil bids then adjust the bidder's team
/// score by ±100 (±200 blind), independent of the team result.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundSummary, DomainError> {
    if state.phase != Phase::RoundEnd {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Round is not ready for scoring",
        ));
    }

    let mut team_bids = [0u8; TEAMS];
    let mut team_tricks = [0u8; TEAMS];
    for seat in 0..PLAYERS as u8 {
        let team = team_of(seat);
        let bid = state.round.bids[seat as usize].ok_or_else(|| {
            DomainError::validation_other(format!(
                "Invariant violated: seat {seat} has no bid at round end"
            ))
        })?;
        team_bids[team] += bid;
        team_tricks[team] += state.round.tricks_won[seat as usize];
    }

    let mut deltas = [0i32; TEAMS];
    for team in 0..TEAMS {
        let bid = team_bids[team] as i32;
        let tricks = team_tricks[team] as i32;
        if tricks >= bid {
            let overtricks = tricks - bid;
            deltas[team] += bid * 10 + overtricks;
            state.bags[team] += overtricks as u8;
            if state.bags[team] >= BAG_LIMIT {
                deltas[team] -= BAG_PENALTY;
                state.bags[team] -= BAG_LIMIT;
            }
        } else {
            deltas[team] -= bid * 10;
        }
    }

    // Nil adjustments are additive on top of the team result.
    for seat in 0..PLAYERS as u8 {
        let idx = seat as usize;
        if state.round.bids[idx] != Some(0) {
            continue;
        }
        let team = team_of(seat);
        let bonus = if state.round.blind_nil[idx] {
            BLIND_NIL_BONUS
        } else {
            NIL_BONUS
        };
        if state.round.tricks_won[idx] == 0 {
            deltas[team] += bonus;
        } else {
            deltas[team] -= bonus;
        }
    }

    for team in 0..TEAMS {
        state.scores[team] += deltas[team];
    }

    Ok(RoundSummary {
        team_bids,
        team_tricks,
        deltas,
    })
}

/// True once either team has reached the winning score.
pub fn is_game_over(scores: &[i32; TEAMS]) -> bool {
    scores.iter().any(|&s| s >= WINNING_SCORE)
}

/// The strictly higher-scoring team, or `None` on an exact tie.
///
/// A tie at or above the winning score does not end the game; another round
/// is played until one team leads outright.
pub fn winning_team(scores: &[i32; TEAMS]) -> Option<usize> {
    match scores[0].cmp(&scores[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    }
}
