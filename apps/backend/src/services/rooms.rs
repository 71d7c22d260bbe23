//! Room registry: the explicit owned collection of all active rooms.
//!
//! No ambient globals - the registry is owned by the orchestrator and passed
//! where needed. Each room is wrapped in its own mutex; actions for a room
//! are serialized by that lock while distinct rooms never contend.

use std::sync::Arc;

use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::distr::{Alphanumeric, SampleString};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::domain::rules::PLAYERS;
use crate::domain::{GameState, Seat};
use crate::errors::domain::{DomainError, NotFoundKind};

const ROOM_CODE_LEN: usize = 6;

/// One seated participant, human or bot.
#[derive(Debug, Clone)]
pub struct PlayerSlot {
    pub id: Uuid,
    pub name: String,
    pub is_bot: bool,
    /// Registry name of the strategy driving this seat when it is a bot.
    pub strategy: String,
    /// False once a human drops; bots are always "connected".
    pub connected: bool,
}

impl PlayerSlot {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_bot: false,
            strategy: String::new(),
            connected: true,
        }
    }

    pub fn bot(name: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_bot: true,
            strategy: strategy.into(),
            connected: true,
        }
    }
}

/// One active room: roster plus the game state the rules engine operates on.
#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub creator: Uuid,
    pub players: Vec<PlayerSlot>,
    pub game: GameState,
    /// Bumped on every mutation; scheduled callbacks carry the epoch they
    /// were issued against and abort on mismatch.
    pub epoch: u64,
}

impl Room {
    fn new(id: String, creator_name: &str) -> Self {
        let creator = PlayerSlot::human(creator_name);
        Self {
            id,
            creator: creator.id,
            players: vec![creator],
            game: GameState::new(),
            epoch: 0,
        }
    }

    pub fn seat_of(&self, player_id: Uuid) -> Option<Seat> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .map(|i| i as Seat)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= PLAYERS
    }

    pub fn connected_humans(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !p.is_bot && p.connected)
            .count()
    }

    /// Mark a state change; returns the new epoch.
    pub fn bump(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}

pub type SharedRoom = Arc<Mutex<Room>>;

/// All active rooms, keyed by join code.
#[derive(Default)]
pub struct RoomRegistry {
    rooms: DashMap<String, SharedRoom>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Create a room with the creator seated at 0. Returns the shared handle.
    pub fn create(&self, creator_name: &str) -> SharedRoom {
        loop {
            let id = room_code();
            // Collisions are unlikely but must not overwrite a live room.
            match self.rooms.entry(id.clone()) {
                MapEntry::Vacant(vacant) => {
                    let room: SharedRoom = Arc::new(Mutex::new(Room::new(id, creator_name)));
                    vacant.insert(room.clone());
                    return room;
                }
                MapEntry::Occupied(_) => continue,
            }
        }
    }

    pub fn get(&self, room_id: &str) -> Option<SharedRoom> {
        self.rooms.get(room_id).map(|r| r.clone())
    }

    pub fn require(&self, room_id: &str) -> Result<SharedRoom, DomainError> {
        self.get(room_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Room, "Room not found"))
    }

    pub fn remove(&self, room_id: &str) {
        self.rooms.remove(room_id);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

fn room_code() -> String {
    let mut rng = ChaCha8Rng::from_os_rng();
    Alphanumeric
        .sample_string(&mut rng, ROOM_CODE_LEN)
        .to_uppercase()
}
