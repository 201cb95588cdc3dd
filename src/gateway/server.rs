//! axum WebSocket server hosting the sensor gateway.
//!
//! Each connection runs two tasks: a writer draining the client's queue from
//! the [`ChannelRegistry`] onto the socket, and a reader dispatching every
//! text frame to the [`SensorGateway`](crate::gateway::SensorGateway) and
//! queueing the reply. When either side finishes the other is aborted and
//! the client is unregistered.

use crate::gateway::{
    channel::{ChannelRegistry, ClientId},
    error::GatewayError,
    handler::DynSensorGateway,
    protocol::OutboundFrame,
};
use axum::{
    Json, Router,
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
    routing::get,
};
use futures::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use serde::Serialize;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Shared state handed to every connection.
#[derive(Clone)]
pub struct GatewayState {
    gateway: Arc<DynSensorGateway>,
    channels: ChannelRegistry,
    announce_connections: bool,
}

impl GatewayState {
    /// Creates server state around a wired gateway.
    #[must_use]
    pub fn new(gateway: Arc<DynSensorGateway>, announce_connections: bool) -> Self {
        Self {
            gateway,
            channels: ChannelRegistry::new(),
            announce_connections,
        }
    }
}

/// Liveness response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    version: &'static str,
    connections: usize,
}

/// Builds the HTTP router: the socket on `/` and `/ws`, plus `/health`.
#[must_use]
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(upgrade))
        .route("/ws", get(upgrade))
        .route("/health", get(health))
        .with_state(state)
}

/// Binds a listener on `addr`.
///
/// # Errors
///
/// Returns [`GatewayError::Bind`] when the address cannot be bound.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, GatewayError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| GatewayError::Bind { addr, source })
}

/// Serves the gateway until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`GatewayError::Serve`] when the server loop fails.
pub async fn serve<F>(
    listener: TcpListener,
    state: GatewayState,
    shutdown: F,
) -> Result<(), GatewayError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "sensor gateway listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(GatewayError::Serve)
}

async fn health(State(state): State<GatewayState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        connections: state.channels.connected_count(),
    })
}

async fn upgrade(ws: WebSocketUpgrade, State(state): State<GatewayState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: GatewayState) {
    let (client_id, outbound) = state.channels.register();
    info!(
        client = %client_id,
        connected = state.channels.connected_count(),
        "client connected"
    );

    state.channels.send_to(client_id, OutboundFrame::welcome());
    if state.announce_connections {
        state.channels.broadcast(&OutboundFrame::announcement());
    }

    let (sender, receiver) = socket.split();
    let mut send_task = spawn_writer(sender, outbound);
    let mut recv_task = spawn_reader(receiver, client_id, state.clone());

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    state.channels.unregister(client_id);
    info!(
        client = %client_id,
        connected = state.channels.connected_count(),
        "client disconnected"
    );
}

fn spawn_writer(
    mut sender: SplitSink<WebSocket, Message>,
    mut outbound: UnboundedReceiver<OutboundFrame>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            let message = match serde_json::to_string(&frame) {
                Ok(json) => Message::Text(json),
                Err(err) => {
                    error!(error = %err, "failed to serialise outbound frame");
                    continue;
                }
            };
            if sender.send(message).await.is_err() {
                break;
            }
        }
        debug!("socket writer finished");
    })
}

fn spawn_reader(
    mut receiver: SplitStream<WebSocket>,
    client_id: ClientId,
    state: GatewayState,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            let reply = match message {
                Message::Text(text) => {
                    debug!(client = %client_id, "frame received");
                    state.gateway.handle_text(&text).await
                }
                Message::Binary(_) => OutboundFrame::malformed(),
                Message::Ping(_) | Message::Pong(_) => continue,
                Message::Close(_) => break,
            };
            if !state.channels.send_to(client_id, reply) {
                break;
            }
        }
        debug!(client = %client_id, "socket reader finished");
    })
}
