//! Services: the room registry and the game-flow orchestrator.

pub mod game_flow;
pub mod rooms;
