
use actix::Recipient;
use tracing::{debug, info};
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::state::Phase;
use crate::domain::{bidding, tricks, Card, Seat};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::services::rooms::Room;
use crate::ws::hub::Outbound;
use crate::ws::protocol::ServerMsg;

/// Identity handed back to a connection after create/join.
#[derive(Debug, Clone)]
pub struct SeatAssignment {
    pub room_id: String,
    pub player_id: Uuid,
    pub seat: Seat,
}

impl GameFlowService {
    /// Create a room with the caller seated at 0.
    pub fn create_game(
        &self,
        name: &str,
        recipient: Option<Recipient<Outbound>>,
    ) -> Result<SeatAssignment, AppError> {
        let room_arc = self.rooms.create(name);
        let room = room_arc.lock();
        let player_id = room.creator;

        if let Some(recipient) = recipient {
            self.hub.register(&room.id, player_id, recipient);
        }

        info!(room_id = %room.id, %player_id, "Room created");

        self.hub.send_to(
            &room.id,
            player_id,
            &ServerMsg::GameCreated {
                room_id: room.id.clone(),
                player_id: player_id.to_string(),
            },
        );
        self.hub.broadcast(&room.id, &Self::roster(&room));

        Ok(SeatAssignment {
            room_id: room.id.clone(),
            player_id,
            seat: 0,
        })
    }

    /// Join an existing room; filling the fourth seat starts bidding.
    pub fn join_game(
        &self,
        room_id: &str,
        name: &str,
        recipient: Option<Recipient<Outbound>>,
    ) -> Result<SeatAssignment, AppError> {
        let room_arc = self.rooms.require(room_id)?;
        let mut room = room_arc.lock();

        if room.is_full() {
            return Err(DomainError::conflict(ConflictKind::RoomFull, "Room is full").into());
        }
        if room.game.phase != Phase::Lobby {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                "Game already started",
            )
            .into());
        }

        let slot = crate::services::rooms::PlayerSlot::human(name);
        let player_id = slot.id;
        room.players.push(slot);
        let seat = (room.players.len() - 1) as Seat;
        room.bump();

        if let Some(recipient) = recipient {
            self.hub.register(&room.id, player_id, recipient);
        }

        info!(room_id = %room.id, %player_id, seat, "Player joined");

        self.hub.send_to(
            &room.id,
            player_id,
            &ServerMsg::JoinedRoom {
                room_id: room.id.clone(),
                player_id: player_id.to_string(),
            },
        );
        self.hub.broadcast(&room.id, &Self::roster(&room));

        if room.is_full() {
            self.begin_bidding(&mut room);
            self.maybe_schedule_step(&room);
        }

        Ok(SeatAssignment {
            room_id: room.id.clone(),
            player_id,
            seat,
        })
    }

    /// Fill the empty seats with bots and begin bidding. Creator only.
    pub fn start_game(&self, room_id: &str, player_id: Uuid) -> Result<(), AppError> {
        let room_arc = self.rooms.require(room_id)?;
        let mut room = room_arc.lock();

        if room.game.phase != Phase::Lobby {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                "Game already started",
            )
            .into());
        }
        if player_id != room.creator {
            return Err(DomainError::validation(
                ValidationKind::NotCreator,
                "Only the room creator may start the game",
            )
            .into());
        }

        while !room.is_full() {
            let seat = room.players.len();
            room.players.push(crate::services::rooms::PlayerSlot::bot(
                format!("Bot {}", seat + 1),
                self.config.bot_strategy.clone(),
            ));
        }
        room.bump();

        info!(room_id = %room.id, "Game started with bot fill");
        self.hub.broadcast(&room.id, &Self::roster(&room));

        self.begin_bidding(&mut room);
        self.maybe_schedule_step(&room);
        Ok(())
    }

    /// Record a bid for the caller's seat.
    pub fn submit_bid(
        &self,
        room_id: &str,
        player_id: Uuid,
        bid: u8,
        blind_nil: bool,
    ) -> Result<(), AppError> {
        let room_arc = self.rooms.require(room_id)?;
        let mut room = room_arc.lock();
        let seat = require_seat(&room, player_id)?;

        self.apply_bid(&mut room, seat, bid, blind_nil)?;
        self.maybe_schedule_step(&room);
        Ok(())
    }

    /// Attempt a play for the caller's seat.
    pub fn play_card(
        &self,
        room_id: &str,
        player_id: Uuid,
        card: Card,
    ) -> Result<(), AppError> {
        let room_arc = self.rooms.require(room_id)?;
        let mut room = room_arc.lock();
        let seat = require_seat(&room, player_id)?;

        self.apply_play(&mut room, seat, card)?;
        self.maybe_schedule_step(&room);
        Ok(())
    }

    /// A connection dropped. Lobby seats are vacated; mid-game seats are
    /// handed to a bot so the round keeps moving. The room dies with its
    /// last connected human.
    pub fn handle_disconnect(&self, room_id: &str, player_id: Uuid) {
        let Some(room_arc) = self.rooms.get(room_id) else {
            return;
        };
        let mut room = room_arc.lock();
        let Some(seat) = room.seat_of(player_id) else {
            return;
        };

        self.hub.unregister(room_id, player_id);

        if room.game.phase == Phase::Lobby {
            room.players.remove(seat as usize);
            // Keep startGame usable if the creator walked out of the lobby.
            if room.creator == player_id {
                if let Some(next) = room.players.iter().find(|p| !p.is_bot && p.connected) {
                    room.creator = next.id;
                }
            }
        } else {
            let strategy = self.config.bot_strategy.clone();
            let slot = &mut room.players[seat as usize];
            slot.connected = false;
            slot.is_bot = true;
            slot.strategy = strategy;
        }
        room.bump();

        info!(room_id = %room.id, %player_id, seat, "Player disconnected");

        if room.connected_humans() == 0 {
            let id = room.id.clone();
            drop(room);
            self.rooms.remove(&id);
            self.hub.remove_room(&id);
            info!(room_id = %id, "Last human left, room removed");
            return;
        }

        self.hub.broadcast(&room.id, &Self::roster(&room));
        self.maybe_schedule_step(&room);
    }

    /// Shared bid application for humans and bots.
    pub(super) fn apply_bid(
        &self,
        room: &mut Room,
        seat: Seat,
        bid: u8,
        blind_nil: bool,
    ) -> Result<(), AppError> {
        let result = bidding::place_bid(&mut room.game, seat, bid, blind_nil)?;
        room.bump();

        debug!(room_id = %room.id, seat, bid, blind_nil, "Bid recorded");
        self.hub.broadcast(
            &room.id,
            &ServerMsg::BidsUpdate {
                bids: room.game.round.bids,
            },
        );

        if result.bidding_complete {
            let leader = bidding::start_play(&mut room.game)?;
            room.bump();
            info!(room_id = %room.id, leader, "All bids in, play begins");
            self.hub.broadcast(&room.id, &ServerMsg::RoundStarted);
            self.hub
                .broadcast(&room.id, &ServerMsg::TurnUpdate { turn: leader });
        }
        Ok(())
    }

    /// Shared play application for humans and bots.
    pub(super) fn apply_play(&self, room: &mut Room, seat: Seat, card: Card) -> Result<(), AppError> {
        let result = tricks::play_card(&mut room.game, seat, card)?;
        room.bump();

        debug!(room_id = %room.id, seat, card = ?card, "Card played");
        self.hub.broadcast(
            &room.id,
            &ServerMsg::CardPlayed {
                player_index: seat,
                card,
            },
        );

        if let Some(winner) = result.trick_winner {
            info!(room_id = %room.id, winner, "Trick resolved");
            self.hub
                .broadcast(&room.id, &ServerMsg::TrickWinner { winner });
        }

        // RoundEnd is advanced by the scheduled step so clients can render
        // the final trick before scores arrive.
        if !result.round_complete {
            if let Some(turn) = room.game.turn {
                self.hub.broadcast(&room.id, &ServerMsg::TurnUpdate { turn });
            }
        }
        Ok(())
    }
}

fn require_seat(room: &Room, player_id: Uuid) -> Result<Seat, DomainError> {
    room.seat_of(player_id)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, "Player not found in room"))
}
