use tracing::{info, warn};

use super::GameFlowService;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{apply_round_scoring, is_game_over, winning_team};
use crate::domain::state::Phase;
use crate::domain::{deal_hands, Seat};
use crate::services::rooms::Room;
use crate::ws::protocol::ServerMsg;

const TEAM_NAMES: [&str; 2] = ["Team A", "Team B"];

impl GameFlowService {
    /// Deal a fresh round and open bidding.
    ///
    /// Human seats receive their hand privately; bot hands stay server-side.
    pub(super) fn begin_bidding(&self, room: &mut Room) {
        room.game.reset_round(deal_hands(None));
        room.bump();

        info!(room_id = %room.id, round = room.game.round_no, "Bidding opened");
        self.hub.broadcast(&room.id, &ServerMsg::BiddingStart);

        for seat in 0..PLAYERS {
            let player = &room.players[seat];
            if player.is_bot || !player.connected {
                continue;
            }
            self.hub.send_to(
                &room.id,
                player.id,
                &ServerMsg::DealCards {
                    hand: room.game.hands[seat].clone(),
                    seat: seat as Seat,
                },
            );
        }
    }

    /// Score the finished round, then either end the game or re-deal.
    ///
    /// Runs from the scheduled step after the thirteenth trick.
    pub(super) fn finish_round(&self, room: &mut Room) {
        let summary = match apply_round_scoring(&mut room.game) {
            Ok(summary) => summary,
            Err(err) => {
                warn!(room_id = %room.id, error = %err, "Round scoring refused");
                return;
            }
        };
        room.bump();

        info!(
            room_id = %room.id,
            round = room.game.round_no,
            team_bids = ?summary.team_bids,
            team_tricks = ?summary.team_tricks,
            deltas = ?summary.deltas,
            scores = ?room.game.scores,
            "Round scored"
        );

        self.hub.broadcast(
            &room.id,
            &ServerMsg::RoundOver {
                scores: room.game.scores,
                bags: room.game.bags,
                round: room.game.round_no,
            },
        );

        let scores = room.game.scores;
        if is_game_over(&scores) {
            // An exact tie at the target keeps the game going for another
            // round; otherwise the higher-scoring team takes it.
            if let Some(team) = winning_team(&scores) {
                room.game.phase = Phase::GameOver;
                room.game.turn = None;
                room.game.leader = None;
                room.bump();

                info!(room_id = %room.id, winner = TEAM_NAMES[team], ?scores, "Game over");
                self.hub.broadcast(
                    &room.id,
                    &ServerMsg::GameOver {
                        scores,
                        winner: TEAM_NAMES[team].to_string(),
                    },
                );
                return;
            }
            info!(room_id = %room.id, ?scores, "Tied at the target, playing another round");
        }

        self.begin_bidding(room);
    }
}
