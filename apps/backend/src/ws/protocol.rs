//! Websocket message protocol.
//!
//! One JSON object per frame, discriminated by a `"type"` field in
//! camelCase. Client payloads carry the room id; server payloads are either
//! room broadcasts, seat-private messages (`dealCards`) or originator-only
//! errors (`errorMessage`).

use serde::{Deserialize, Serialize};

use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::{Card, Seat};
use crate::errors::ErrorCode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMsg {
    #[serde(rename_all = "camelCase")]
    CreateGame { name: String },
    #[serde(rename_all = "camelCase")]
    JoinGame { room_id: String, name: String },
    #[serde(rename_all = "camelCase")]
    StartGame { room_id: String },
    #[serde(rename_all = "camelCase")]
    Bid {
        room_id: String,
        bid: u8,
        #[serde(default)]
        blind_nil: bool,
    },
    #[serde(rename_all = "camelCase")]
    PlayCard { room_id: String, card: Card },
}

/// Roster entry for `playerList`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub name: String,
    pub is_bot: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMsg {
    #[serde(rename_all = "camelCase")]
    GameCreated { room_id: String, player_id: String },
    #[serde(rename_all = "camelCase")]
    JoinedRoom { room_id: String, player_id: String },
    #[serde(rename_all = "camelCase")]
    PlayerList { players: Vec<PlayerInfo> },
    BiddingStart,
    #[serde(rename_all = "camelCase")]
    DealCards { hand: Vec<Card>, seat: Seat },
    #[serde(rename_all = "camelCase")]
    BidsUpdate { bids: [Option<u8>; PLAYERS] },
    RoundStarted,
    #[serde(rename_all = "camelCase")]
    TurnUpdate { turn: Seat },
    #[serde(rename_all = "camelCase")]
    CardPlayed { player_index: Seat, card: Card },
    #[serde(rename_all = "camelCase")]
    TrickWinner { winner: Seat },
    #[serde(rename_all = "camelCase")]
    RoundOver {
        scores: [i32; TEAMS],
        bags: [u8; TEAMS],
        round: u8,
    },
    #[serde(rename_all = "camelCase")]
    GameOver {
        scores: [i32; TEAMS],
        winner: String,
    },
    #[serde(rename_all = "camelCase")]
    ErrorMessage { code: ErrorCode, message: String },
}
