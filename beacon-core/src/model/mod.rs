mod connection;
mod protocol;
mod room;

pub use connection::ConnectionId;
pub use protocol::{ClientEvent, SignalEvent};
pub use room::RoomId;
