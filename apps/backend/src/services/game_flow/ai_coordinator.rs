use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::GameFlowService;
use crate::ai;
use crate::domain::state::Phase;
use crate::domain::{BotView, Seat};
use crate::error::AppError;
use crate::services::rooms::Room;

/// Type of automated action a seat owes the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Bid,
    Play,
}

impl GameFlowService {
    /// After any state change: if the room now owes an automated step,
    /// enqueue exactly one delayed task for it.
    ///
    /// The task carries the room's current epoch; by the time it fires the
    /// room may have been deleted (existence check) or acted on by a human
    /// (epoch check), and the task then does nothing. Follow-up bot moves
    /// are scheduled by the fired step itself, so the chain is an explicit
    /// sequence of single steps, never recursion within one timer tick.
    pub(super) fn maybe_schedule_step(&self, room: &Room) {
        let Some(delay) = self.pending_step_delay(room) else {
            return;
        };
        let Some(this) = self.self_ref.upgrade() else {
            return;
        };

        let room_id = room.id.clone();
        let epoch = room.epoch;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            this.run_scheduled_step(&room_id, Some(epoch));
        });
    }

    /// Delay for the step the room currently owes, if any.
    fn pending_step_delay(&self, room: &Room) -> Option<Duration> {
        match room.game.phase {
            Phase::RoundEnd => Some(self.config.advance_delay),
            Phase::Bidding | Phase::Playing => self
                .next_automated_action(room)
                .map(|_| self.config.bot_delay),
            Phase::Lobby | Phase::GameOver => None,
        }
    }

    /// Whose automated move is due, if the acting seat is a bot.
    pub(super) fn next_automated_action(&self, room: &Room) -> Option<(Seat, ActionType)> {
        let seat = room.game.turn?;
        let action = match room.game.phase {
            Phase::Bidding => ActionType::Bid,
            Phase::Playing => ActionType::Play,
            _ => return None,
        };
        room.players
            .get(seat as usize)
            .filter(|p| p.is_bot)
            .map(|_| (seat, action))
    }

    /// Execute one scheduled step for a room.
    ///
    /// `expected_epoch` is the epoch captured at scheduling time; `None`
    /// skips the staleness check (used by tests driving the chain
    /// directly). Returns whether a step ran.
    pub fn run_scheduled_step(&self, room_id: &str, expected_epoch: Option<u64>) -> bool {
        let Some(room_arc) = self.rooms.get(room_id) else {
            debug!(room_id, "Scheduled step for missing room, ignoring");
            return false;
        };
        let mut room = room_arc.lock();

        if let Some(epoch) = expected_epoch {
            if room.epoch != epoch {
                debug!(
                    room_id,
                    expected = epoch,
                    actual = room.epoch,
                    "Scheduled step superseded, ignoring"
                );
                return false;
            }
        }

        let acted = match room.game.phase {
            Phase::RoundEnd => {
                self.finish_round(&mut room);
                true
            }
            Phase::Bidding | Phase::Playing => match self.next_automated_action(&room) {
                Some((seat, action)) => {
                    self.execute_bot_action(&mut room, seat, action);
                    true
                }
                None => false,
            },
            Phase::Lobby | Phase::GameOver => false,
        };

        if acted {
            self.maybe_schedule_step(&room);
        }
        acted
    }

    /// Run one bot decision through the same validated path as a human
    /// action. A bot that keeps producing illegal moves stalls its seat
    /// rather than corrupting the room.
    fn execute_bot_action(&self, room: &mut Room, seat: Seat, action: ActionType) {
        const MAX_RETRIES_PER_ACTION: usize = 3;

        let strategy = room.players[seat as usize].strategy.clone();
        let Some(bot) = ai::create_bot(&strategy, None) else {
            error!(room_id = %room.id, seat, strategy = %strategy, "Unknown bot strategy for seat");
            return;
        };

        info!(room_id = %room.id, seat, action = ?action, "Processing bot turn");

        let mut last_error: Option<AppError> = None;
        for retry in 0..MAX_RETRIES_PER_ACTION {
            let view = BotView::for_seat(&room.game, seat);
            let result = match action {
                ActionType::Bid => bot
                    .choose_bid(&view)
                    .map_err(AppError::from)
                    .and_then(|bid| self.apply_bid(room, seat, bid, false)),
                ActionType::Play => bot
                    .choose_play(&view)
                    .map_err(AppError::from)
                    .and_then(|card| self.apply_play(room, seat, card)),
            };

            match result {
                Ok(()) => {
                    debug!(room_id = %room.id, seat, retry, "Bot action executed");
                    return;
                }
                Err(err) => {
                    warn!(room_id = %room.id, seat, retry, error = %err, "Bot action failed");
                    last_error = Some(err);
                }
            }
        }

        error!(
            room_id = %room.id,
            seat,
            error = ?last_error,
            "Bot exhausted retries, seat stalls until the next action"
        );
    }
}
