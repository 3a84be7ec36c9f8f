//! Notification WebSocket.
//!
//! The first client frame must carry the bearer token. Once verified, the
//! connection joins the caller's role room and `user-{id}` room and stays
//! open for pushed notifications and ping/pong.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use portal_models::{ClientFrame, WsMessage};

use crate::auth::{verify_token, Claims};
use crate::hub::user_room;
use crate::state::AppState;

/// First frame of the handshake.
#[derive(Debug, Deserialize)]
struct WsHello {
    token: String,
}

/// Notification socket endpoint.
pub async fn ws_notifications(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    let claims = match authenticate(&mut sender, &mut receiver, &state).await {
        Some(claims) => claims,
        None => return,
    };

    info!(user = %claims.email, role = %claims.role, "websocket connected");

    // Role room plus the per-user room, for targeted pushes.
    let role_rx = state.hub.subscribe(&claims.role.to_string()).await;
    let user_rx = state.hub.subscribe(&user_room(claims.sub)).await;

    let connected = WsMessage::connected(&claims.email, claims.role.to_string());
    if send_frame(&mut sender, &connected).await.is_err() {
        return;
    }

    serve_rooms(&mut sender, &mut receiver, role_rx, user_rx).await;

    info!(user = %claims.email, "websocket disconnected");
}

/// Read and verify the token handshake; an error frame is the last thing
/// a failed connection sees.
async fn authenticate(
    sender: &mut SplitSink<WebSocket, Message>,
    receiver: &mut SplitStream<WebSocket>,
    state: &AppState,
) -> Option<Claims> {
    let hello: WsHello = match receiver.next().await {
        Some(Ok(Message::Text(text))) => match serde_json::from_str(&text) {
            Ok(hello) => hello,
            Err(e) => {
                let frame = WsMessage::error(format!("Invalid request: {e}"));
                let _ = send_frame(sender, &frame).await;
                return None;
            }
        },
        _ => {
            let frame = WsMessage::error("Authentication error: No token provided");
            let _ = send_frame(sender, &frame).await;
            return None;
        }
    };

    match verify_token(&hello.token, &state.config.jwt_secret) {
        Ok(claims) => Some(claims),
        Err(_) => {
            let frame = WsMessage::error("Authentication error: Invalid token");
            let _ = send_frame(sender, &frame).await;
            None
        }
    }
}

/// Pump hub messages out and answer pings until either side hangs up.
async fn serve_rooms(
    sender: &mut SplitSink<WebSocket, Message>,
    receiver: &mut SplitStream<WebSocket>,
    mut role_rx: broadcast::Receiver<WsMessage>,
    mut user_rx: broadcast::Receiver<WsMessage>,
) {
    loop {
        tokio::select! {
            frame = receiver.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    if let Ok(ClientFrame::Ping) = serde_json::from_str::<ClientFrame>(&text) {
                        if send_frame(sender, &WsMessage::pong()).await.is_err() {
                            break;
                        }
                    }
                    // Unknown frames are ignored.
                }
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            msg = role_rx.recv() => {
                if !forward(sender, msg).await {
                    break;
                }
            }
            msg = user_rx.recv() => {
                if !forward(sender, msg).await {
                    break;
                }
            }
        }
    }
}

async fn send_frame(
    sender: &mut SplitSink<WebSocket, Message>,
    frame: &WsMessage,
) -> Result<(), axum::Error> {
    match serde_json::to_string(frame) {
        Ok(json) => sender.send(Message::Text(json)).await,
        Err(_) => Ok(()),
    }
}

/// Forward a hub message. Lagged receivers skip the lost frames and keep
/// the connection.
async fn forward(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: Result<WsMessage, RecvError>,
) -> bool {
    match msg {
        Ok(frame) => send_frame(sender, &frame).await.is_ok(),
        Err(RecvError::Lagged(skipped)) => {
            warn!(skipped, "notification receiver lagged");
            true
        }
        Err(RecvError::Closed) => false,
    }
}
