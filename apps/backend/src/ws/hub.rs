//! Connection registry and event fan-out.
//!
//! Sessions register a recipient per (room, player); the orchestrator
//! delivers room broadcasts and seat-private messages through here. A
//! missing recipient (bot seat, or a player who already dropped) is simply
//! skipped - delivery is best-effort by design of the protocol.

use actix::prelude::*;
use dashmap::DashMap;
use tracing::warn;
use uuid::Uuid;

use crate::ws::protocol::ServerMsg;

/// Actor message wrapping one outbound protocol frame.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct Outbound(pub ServerMsg);

#[derive(Default)]
pub struct GameHub {
    rooms: DashMap<String, DashMap<Uuid, Recipient<Outbound>>>,
}

impl GameHub {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    pub fn register(&self, room_id: &str, player_id: Uuid, recipient: Recipient<Outbound>) {
        let entry = self
            .rooms
            .entry(room_id.to_owned())
            .or_insert_with(DashMap::new);
        entry.insert(player_id, recipient);
    }

    pub fn unregister(&self, room_id: &str, player_id: Uuid) {
        if let Some(entry) = self.rooms.get(room_id) {
            entry.remove(&player_id);
            if entry.is_empty() {
                drop(entry);
                self.rooms.remove(room_id);
            }
        }
    }

    pub fn remove_room(&self, room_id: &str) {
        self.rooms.remove(room_id);
    }

    /// Send one message to every registered connection in the room.
    pub fn broadcast(&self, room_id: &str, msg: &ServerMsg) {
        if let Some(entry) = self.rooms.get(room_id) {
            for recipient in entry.iter() {
                recipient.value().do_send(Outbound(msg.clone()));
            }
        }
    }

    /// Send one message to a single player's connection, if registered.
    pub fn send_to(&self, room_id: &str, player_id: Uuid, msg: &ServerMsg) {
        let Some(entry) = self.rooms.get(room_id) else {
            warn!(room_id, %player_id, "send_to on unknown room");
            return;
        };
        if let Some(recipient) = entry.get(&player_id) {
            recipient.do_send(Outbound(msg.clone()));
        };
    }

    #[cfg(test)]
    pub fn connection_count(&self, room_id: &str) -> usize {
        self.rooms.get(room_id).map(|e| e.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    struct Collector {
        frames: std::sync::Arc<Mutex<Vec<ServerMsg>>>,
    }

    impl Actor for Collector {
        type Context = Context<Self>;
    }

    impl Handler<Outbound> for Collector {
        type Result = ();

        fn handle(&mut self, msg: Outbound, _ctx: &mut Context<Self>) {
            self.frames.lock().unwrap().push(msg.0);
        }
    }

    fn collector() -> (Addr<Collector>, std::sync::Arc<Mutex<Vec<ServerMsg>>>) {
        let frames = std::sync::Arc::new(Mutex::new(Vec::new()));
        let addr = Collector {
            frames: frames.clone(),
        }
        .start();
        (addr, frames)
    }

    #[actix_web::test]
    async fn broadcast_stays_within_the_room() {
        let hub = GameHub::new();
        let (a, frames_a) = collector();
        let (b, frames_b) = collector();
        let id_a = Uuid::new_v4();
        let id_b = Uuid::new_v4();

        hub.register("R1", id_a, a.recipient());
        hub.register("R2", id_b, b.recipient());

        hub.broadcast("R1", &ServerMsg::BiddingStart);
        hub.send_to("R1", id_a, &ServerMsg::RoundStarted);
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(frames_a.lock().unwrap().len(), 2);
        assert!(frames_b.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unregister_drops_delivery_and_empty_rooms() {
        let hub = GameHub::new();
        let (a, frames_a) = collector();
        let id_a = Uuid::new_v4();

        hub.register("R1", id_a, a.recipient());
        assert_eq!(hub.connection_count("R1"), 1);

        hub.unregister("R1", id_a);
        assert_eq!(hub.connection_count("R1"), 0);

        hub.broadcast("R1", &ServerMsg::BiddingStart);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(frames_a.lock().unwrap().is_empty());
    }
}
