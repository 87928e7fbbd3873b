//! WebSocket transport: one JSON-RPC request per text frame, one response
//! frame back on the same socket.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        ConnectInfo, WebSocketUpgrade,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;

use crate::rpc::{handle_request, JsonRpcRequest, JsonRpcResponse};

pub fn router() -> Router {
    Router::new()
        .route("/", get(ws_handler))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, addr))
}

async fn handle_socket(mut socket: WebSocket, addr: SocketAddr) {
    tracing::info!(%addr, "client connected");

    while let Some(message) = socket.recv().await {
        let message = match message {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(%addr, error = %e, "socket error");
                break;
            }
        };
        let text = match message {
            Message::Text(text) => text,
            Message::Close(_) => break,
            // Ping/pong handled by axum; binary frames are not part of the
            // protocol and are ignored.
            _ => continue,
        };

        let response = match serde_json::from_str::<JsonRpcRequest>(&text) {
            Ok(request) => handle_request(request),
            Err(e) => {
                tracing::warn!(%addr, error = %e, "invalid request frame");
                JsonRpcResponse::parse_error()
            }
        };

        let encoded = match serde_json::to_string(&response) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(%addr, error = %e, "response encoding failed");
                continue;
            }
        };
        if socket.send(Message::Text(encoded)).await.is_err() {
            break;
        }
    }

    tracing::info!(%addr, "client disconnected");
}
