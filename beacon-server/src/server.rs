use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::signaling::{SessionManager, ws_handler};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub struct AppState {
    pub sessions: SessionManager,
}

/// Builds the HTTP surface: the WebSocket endpoint at `/ws`, the static
/// front-end bundle for everything else. Unmatched paths fall through to a
/// 404 with an empty body, which `ServeDir` produces for missing files.
pub fn build_router(config: &ServerConfig) -> Result<Router, ServerError> {
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .map_err(|_| ServerError::InvalidOrigin(config.allowed_origin.clone()))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(AppState {
        sessions: SessionManager::new(),
    });

    Ok(Router::new()
        .route("/ws", get(ws_handler))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(state))
}
