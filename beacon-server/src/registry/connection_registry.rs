use beacon_core::{ConnectionId, SignalEvent};
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Tracks every live transport connection and owns its outbound channel.
/// Liveness is defined as presence in the map: a connection exists from
/// `register` until `unregister`, nothing in between changes its state.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<SignalEvent>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Allocates a fresh identifier for a newly accepted transport and
    /// records its outbound sender. Identifiers are v4 UUIDs, unique for the
    /// process lifetime.
    pub fn register(&self, tx: mpsc::UnboundedSender<SignalEvent>) -> ConnectionId {
        let id = ConnectionId::new();
        self.connections.insert(id.clone(), tx);
        id
    }

    /// Removes the connection. Idempotent: a second call is a no-op and
    /// returns false.
    pub fn unregister(&self, id: &ConnectionId) -> bool {
        self.connections.remove(id).is_some()
    }

    pub fn is_live(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    /// Queues an event on the target's outbound channel. Best-effort: if the
    /// target is gone, or its send task already hung up, the event is
    /// dropped.
    pub fn send(&self, id: &ConnectionId, event: SignalEvent) {
        let Some(tx) = self.connections.get(id) else {
            debug!("dropping event for unknown connection {}", id);
            return;
        };
        if tx.send(event).is_err() {
            warn!("outbound channel for {} is closed", id);
        }
    }
}
