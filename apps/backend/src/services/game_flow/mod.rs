//! Game flow orchestration - drives rooms through bidding, play, round end
//! and the next round, interleaving human actions with scheduled bot steps.
//!
//! All mutations for a room happen under that room's mutex, one action at a
//! time. Events are fanned out through the websocket hub; rejected actions
//! emit nothing and reach only the originator as an `errorMessage`.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;

use std::sync::{Arc, Weak};

use crate::config::GameConfig;
use crate::services::rooms::{Room, RoomRegistry};
use crate::ws::hub::GameHub;
use crate::ws::protocol::{PlayerInfo, ServerMsg};

pub use ai_coordinator::ActionType;

/// Orchestrator for every active room.
pub struct GameFlowService {
    rooms: RoomRegistry,
    hub: Arc<GameHub>,
    config: GameConfig,
    /// Handle to ourselves for the scheduled-step tasks; a task that
    /// outlives the service simply fails the upgrade and dies.
    self_ref: Weak<GameFlowService>,
}

impl GameFlowService {
    pub fn new(config: GameConfig) -> Arc<Self> {
        Arc::new_cyclic(|weak| Self {
            rooms: RoomRegistry::new(),
            hub: Arc::new(GameHub::new()),
            config,
            self_ref: weak.clone(),
        })
    }

    pub fn hub(&self) -> Arc<GameHub> {
        self.hub.clone()
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current roster broadcast payload for a room.
    fn roster(room: &Room) -> ServerMsg {
        ServerMsg::PlayerList {
            players: room
                .players
                .iter()
                .map(|p| PlayerInfo {
                    name: p.name.clone(),
                    is_bot: p.is_bot,
                })
                .collect(),
        }
    }
}
