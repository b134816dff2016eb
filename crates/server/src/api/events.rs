use std::sync::Arc;

use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::{dto::EventDto, state::AppState};

/// Live event feed. Subscribers only see events published while they are
/// connected; there is no replay.
pub async fn events(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| stream_events(socket, state))
}

async fn stream_events(mut socket: WebSocket, state: Arc<AppState>) {
    let mut rx = state.bus.subscribe();
    debug!("subscriber connected");
    loop {
        match rx.recv().await {
            Ok(event) => {
                let envelope = EventDto::from(&event);
                let Ok(text) = serde_json::to_string(&envelope) else {
                    continue;
                };
                if socket.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "subscriber lagged, events dropped");
            }
            Err(RecvError::Closed) => break,
        }
    }
    debug!("subscriber disconnected");
}
