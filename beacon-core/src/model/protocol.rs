use crate::model::connection::ConnectionId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events a client sends over the socket. SDP and ICE payloads are kept as
/// raw JSON values; the server relays them without looking inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    JoinRoom {
        #[serde(rename = "roomId")]
        room_id: RoomId,
    },
    CallUser {
        offer: Value,
        to: ConnectionId,
    },
    Ice {
        candidate: Value,
        to: ConnectionId,
    },
    MakeAnswer {
        answer: Value,
        to: ConnectionId,
    },
    RejectCall {
        from: ConnectionId,
    },
}

/// Events the server emits. The `socket` field always carries the identifier
/// of the connection the event originated from, stamped by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum SignalEvent {
    Welcome {
        #[serde(rename = "socketId")]
        socket_id: ConnectionId,
    },
    UserList {
        users: Vec<ConnectionId>,
    },
    CallMade {
        offer: Value,
        socket: ConnectionId,
    },
    Ice {
        candidate: Value,
        socket: ConnectionId,
    },
    AnswerMade {
        answer: Value,
        socket: ConnectionId,
    },
    CallRejected {
        socket: ConnectionId,
    },
    RemoveUser {
        #[serde(rename = "socketId")]
        socket_id: ConnectionId,
    },
}
