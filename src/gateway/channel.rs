//! Registry of connected client channels.

use crate::gateway::protocol::OutboundFrame;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Identifier of one connected client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Generates a fresh client identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outbound queues of every connected client.
///
/// Each client owns a writer task draining its queue onto the socket, so
/// sending never blocks the caller. A registry clone shares the same set.
#[derive(Debug, Clone, Default)]
pub struct ChannelRegistry {
    clients: Arc<RwLock<HashMap<ClientId, UnboundedSender<OutboundFrame>>>>,
}

impl ChannelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new client and returns its identifier and queue.
    pub fn register(&self) -> (ClientId, UnboundedReceiver<OutboundFrame>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = ClientId::new();
        self.clients
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, sender);
        (id, receiver)
    }

    /// Removes a client. Returns `false` when it was not registered.
    pub fn unregister(&self, id: ClientId) -> bool {
        self.clients
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    /// Queues a frame for one client.
    ///
    /// Returns `false` when the client is unknown or its writer has stopped.
    pub fn send_to(&self, id: ClientId, frame: OutboundFrame) -> bool {
        self.clients
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .is_some_and(|sender| sender.send(frame).is_ok())
    }

    /// Queues a frame for every connected client and returns how many
    /// queues accepted it.
    pub fn broadcast(&self, frame: &OutboundFrame) -> usize {
        self.clients
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|sender| sender.send(frame.clone()).is_ok())
            .count()
    }

    /// Returns the number of connected clients.
    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.clients
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
