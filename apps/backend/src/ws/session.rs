use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::game_flow::GameFlowService;
use crate::state::app_state::AppState;
use crate::ws::hub::Outbound;
use crate::ws::protocol::{ClientMsg, ServerMsg};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = WsSession::new(app_state.game_flow());
    ws::start(session, &req, stream)
}

pub struct WsSession {
    flow: Arc<GameFlowService>,
    /// Set once this connection has created or joined a room.
    joined: Option<(String, Uuid)>,
    last_heartbeat: Instant,
}

impl WsSession {
    pub fn new(flow: Arc<GameFlowService>) -> Self {
        Self {
            flow,
            joined: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    /// Errors are scoped to this connection only; room state is untouched.
    fn send_error(ctx: &mut ws::WebsocketContext<Self>, err: &AppError) {
        Self::send_json(
            ctx,
            &ServerMsg::ErrorMessage {
                code: err.code(),
                message: err.detail().to_string(),
            },
        );
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!("[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn require_membership(&self, room_id: &str) -> Result<Uuid, AppError> {
        match &self.joined {
            Some((joined_room, player_id)) if joined_room == room_id => Ok(*player_id),
            Some(_) => Err(AppError::bad_request(
                ErrorCode::BadRequest,
                "Connection belongs to a different room",
            )),
            None => Err(AppError::bad_request(
                ErrorCode::BadRequest,
                "Create or join a room first",
            )),
        }
    }

    fn dispatch(
        &mut self,
        cmd: ClientMsg,
        ctx: &mut ws::WebsocketContext<Self>,
    ) -> Result<(), AppError> {
        match cmd {
            ClientMsg::CreateGame { name } => {
                if self.joined.is_some() {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Connection is already in a room",
                    ));
                }
                let recipient = ctx.address().recipient::<Outbound>();
                let assignment = self.flow.create_game(&name, Some(recipient))?;
                self.joined = Some((assignment.room_id, assignment.player_id));
                Ok(())
            }
            ClientMsg::JoinGame { room_id, name } => {
                if self.joined.is_some() {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Connection is already in a room",
                    ));
                }
                let recipient = ctx.address().recipient::<Outbound>();
                let assignment = self.flow.join_game(&room_id, &name, Some(recipient))?;
                self.joined = Some((assignment.room_id, assignment.player_id));
                Ok(())
            }
            ClientMsg::StartGame { room_id } => {
                let player_id = self.require_membership(&room_id)?;
                self.flow.start_game(&room_id, player_id)
            }
            ClientMsg::Bid {
                room_id,
                bid,
                blind_nil,
            } => {
                let player_id = self.require_membership(&room_id)?;
                self.flow.submit_bid(&room_id, player_id, bid, blind_nil)
            }
            ClientMsg::PlayCard { room_id, card } => {
                let player_id = self.require_membership(&room_id)?;
                self.flow.play_card(&room_id, player_id, card)
            }
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[WS SESSION] started");
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some((room_id, player_id)) = self.joined.take() {
            self.flow.handle_disconnect(&room_id, player_id);
        }
        info!("[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                let Ok(cmd) = parsed else {
                    Self::send_error(
                        ctx,
                        &AppError::bad_request(ErrorCode::BadRequest, "Malformed message"),
                    );
                    return;
                };

                if let Err(err) = self.dispatch(cmd, ctx) {
                    Self::send_error(ctx, &err);
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                Self::send_error(
                    ctx,
                    &AppError::bad_request(ErrorCode::BadRequest, "Binary not supported"),
                );
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(error = %err, "[WS SESSION] protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Outbound> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Outbound, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &msg.0);
    }
}
