use crate::server::AppState;
use crate::signaling::SessionManager;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use beacon_core::{ClientEvent, ConnectionId};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Parses one inbound text frame and hands it to the session manager.
/// Malformed frames are logged and dropped; the connection keeps running and
/// later frames are unaffected.
pub fn dispatch_frame(sessions: &SessionManager, id: &ConnectionId, text: &str) {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => sessions.handle_event(id, event),
        Err(e) => warn!("invalid frame from {}: {}", id, e),
    }
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.sessions.clone()))
}

async fn handle_socket(socket: WebSocket, sessions: SessionManager) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let connection_id = sessions.connect(tx);
    info!("socket {} connected", connection_id);

    let mut send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => error!("failed to serialize outbound event: {}", e),
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let sessions = sessions.clone();
        let connection_id = connection_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => dispatch_frame(&sessions, &connection_id, &text),
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    sessions.disconnect(&connection_id);
    info!("socket {} disconnected", connection_id);
}
