pub mod config;
pub mod error;
pub mod registry;
pub mod room;
pub mod server;
pub mod signaling;

pub use config::ServerConfig;
pub use error::ServerError;
pub use registry::ConnectionRegistry;
pub use room::RoomDirectory;
pub use server::{AppState, build_router};
pub use signaling::{SessionManager, SignalingRouter, dispatch_frame, ws_handler};
