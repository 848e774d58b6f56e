use crate::registry::ConnectionRegistry;
use crate::room::RoomDirectory;
use crate::signaling::SignalingRouter;
use beacon_core::{ClientEvent, ConnectionId, RoomId, SignalEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Drives the per-connection lifecycle: Connected, optionally InRoom,
/// Disconnected. Owns the registry and room directory and is the only code
/// that mutates them; the transport layer just feeds it events.
#[derive(Clone)]
pub struct SessionManager {
    registry: Arc<ConnectionRegistry>,
    rooms: Arc<RoomDirectory>,
    router: SignalingRouter,
}

impl SessionManager {
    pub fn new() -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        Self {
            router: SignalingRouter::new(registry.clone()),
            registry,
            rooms: Arc::new(RoomDirectory::new()),
        }
    }

    /// Registers a freshly accepted transport and tells the client its
    /// assigned identifier. Every later event for this connection must carry
    /// the returned id.
    pub fn connect(&self, tx: mpsc::UnboundedSender<SignalEvent>) -> ConnectionId {
        let id = self.registry.register(tx);
        info!("connection {} registered", id);

        self.registry.send(
            &id,
            SignalEvent::Welcome {
                socket_id: id.clone(),
            },
        );
        id
    }

    pub fn handle_event(&self, id: &ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::JoinRoom { room_id } => {
                info!("room {} joined by {}", room_id, id);
                let (members, displaced) = self.rooms.join(&room_id, id.clone());

                // A join while already in a room is a move: the old room is
                // told the peer is gone, the new room is told it arrived.
                if let Some((old_room, remaining)) = displaced {
                    self.notify_removed(id, &old_room, &remaining);
                }

                // Existing members learn about the newcomer. The list
                // includes the joiner itself; consumers filter their own id.
                for member in &members {
                    if member != id {
                        self.registry.send(
                            member,
                            SignalEvent::UserList {
                                users: members.clone(),
                            },
                        );
                    }
                }
            }
            relayable => self.router.relay(id, relayable),
        }
    }

    /// Tears the connection down: leaves its room, tells the remaining
    /// members, and releases the registry entry. Safe to call more than
    /// once; only the first call notifies anyone.
    pub fn disconnect(&self, id: &ConnectionId) {
        self.leave_current_room(id);

        if self.registry.unregister(id) {
            info!("connection {} unregistered", id);
        }
    }

    fn leave_current_room(&self, id: &ConnectionId) {
        let Some((room_id, remaining)) = self.rooms.leave(id) else {
            return;
        };
        self.notify_removed(id, &room_id, &remaining);
    }

    fn notify_removed(&self, id: &ConnectionId, room_id: &RoomId, remaining: &[ConnectionId]) {
        info!("connection {} left room {}", id, room_id);
        for member in remaining {
            self.registry.send(
                member,
                SignalEvent::RemoveUser {
                    socket_id: id.clone(),
                },
            );
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn rooms(&self) -> &RoomDirectory {
        &self.rooms
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
