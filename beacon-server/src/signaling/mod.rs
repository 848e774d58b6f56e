mod router;
mod session;
mod ws_handler;

pub use router::SignalingRouter;
pub use session::SessionManager;
pub use ws_handler::{dispatch_frame, ws_handler};
