use beacon_core::{ConnectionId, RoomId};
use dashmap::DashMap;
use std::collections::HashSet;
use tracing::info;

/// Maps rooms to their member sets. Rooms are created on first join and
/// dropped once the last member leaves. A connection occupies at most one
/// room at a time; the occupancy map enforces that and makes `leave` a
/// lookup instead of a scan.
///
/// Mutation is serialized per room by the map's entry locking; unrelated
/// rooms never contend.
#[derive(Default)]
pub struct RoomDirectory {
    rooms: DashMap<RoomId, HashSet<ConnectionId>>,
    occupancy: DashMap<ConnectionId, RoomId>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            occupancy: DashMap::new(),
        }
    }

    /// Adds the connection to the room, creating the room if absent, and
    /// returns the full member list including the joiner. Joining while
    /// already in another room moves the connection; the room it was
    /// displaced from (with its remaining members) is returned alongside so
    /// the caller can notify them.
    pub fn join(
        &self,
        room_id: &RoomId,
        id: ConnectionId,
    ) -> (Vec<ConnectionId>, Option<(RoomId, Vec<ConnectionId>)>) {
        let displaced = match self.occupancy.get(&id).map(|r| r.value().clone()) {
            Some(previous) if previous != *room_id => self.leave(&id),
            _ => None,
        };

        let mut members = self.rooms.entry(room_id.clone()).or_default();
        members.insert(id.clone());
        self.occupancy.insert(id, room_id.clone());

        info!("room {} now has {} member(s)", room_id, members.len());
        (members.iter().cloned().collect(), displaced)
    }

    /// Removes the connection from whatever room it occupies. Returns the
    /// room and the remaining members so the caller can notify them, or
    /// None if the connection was in no room. Idempotent.
    pub fn leave(&self, id: &ConnectionId) -> Option<(RoomId, Vec<ConnectionId>)> {
        let (_, room_id) = self.occupancy.remove(id)?;

        let mut remaining = Vec::new();
        if let Some(mut members) = self.rooms.get_mut(&room_id) {
            members.remove(id);
            remaining = members.iter().cloned().collect();
        }

        if remaining.is_empty() {
            self.rooms.remove_if(&room_id, |_, members| members.is_empty());
            info!("room {} is empty, dropping it", room_id);
        }

        Some((room_id, remaining))
    }

    pub fn members(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        self.rooms
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn room_of(&self, id: &ConnectionId) -> Option<RoomId> {
        self.occupancy.get(id).map(|r| r.value().clone())
    }
}
