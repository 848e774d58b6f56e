use crate::error::ServerError;
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_STATIC_DIR: &str = "public";

/// Runtime configuration, read from the environment. Only the listen port,
/// the front-end origin for the WebSocket handshake, and the static bundle
/// directory are configurable; everything else is in-memory state.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origin: String,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        let port = match env::var("BEACON_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ServerError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origin =
            env::var("BEACON_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.into());

        let static_dir = env::var("BEACON_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            port,
            allowed_origin,
            static_dir,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.into(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
