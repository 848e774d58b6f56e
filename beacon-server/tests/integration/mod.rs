pub mod messaging_tests;

use beacon_server::SessionManager;
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_session_manager() -> SessionManager {
    init_tracing();
    SessionManager::new()
}
