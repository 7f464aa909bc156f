// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use folio_core::{FolioError, Responder, Reviewer};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Health state for the health endpoints.
#[derive(Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: std::time::Instant,
}

/// Chat endpoint tuning.
#[derive(Debug, Clone, Copy)]
pub struct ChatSettings {
    /// Artificial delay before each chat reply. Zero disables it.
    pub response_delay: Duration,
    /// Longest accepted message, in characters.
    pub max_message_chars: usize,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Produces chat replies.
    pub responder: Arc<dyn Responder>,
    /// Produces resume feedback.
    pub reviewer: Arc<dyn Reviewer>,
    pub chat: ChatSettings,
    pub health: HealthState,
}

/// Gateway server configuration (mirrors the `[server]` and `[resume]`
/// sections of `folio-config`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind. `0` picks a free port.
    pub port: u16,
    /// Prefix for the API routes, e.g. `/api/v1`. Empty mounts them at the root.
    pub base_path: String,
    /// Attach a permissive CORS layer.
    pub cors_permissive: bool,
    /// Body limit for resume uploads, in bytes.
    pub max_upload_bytes: usize,
}

/// Build the gateway router.
///
/// Routes, relative to `base_path`:
/// - POST /ai/chat
/// - POST /ai/resume-review
/// - GET /health
///
/// A bare GET /health is also served when `base_path` is non-empty.
/// Unknown paths get a JSON 404.
pub fn build_router(config: &ServerConfig, state: GatewayState) -> Router {
    let api_routes = Router::new()
        .route("/ai/chat", post(handlers::post_chat))
        .route(
            "/ai/resume-review",
            post(handlers::post_resume_review)
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .route("/health", get(handlers::get_health));

    let mut app = if config.base_path.is_empty() {
        api_routes
    } else {
        Router::new()
            .nest(&config.base_path, api_routes)
            .route("/health", get(handlers::get_health))
    };

    app = app.fallback(handlers::not_found);

    let app = app
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Bind the configured address.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, FolioError> {
    let addr = format!("{}:{}", config.host, config.port);
    TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::Server {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })
}

/// Serve `app` on `listener` until `cancel` fires.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    cancel: CancellationToken,
) -> Result<(), FolioError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Gateway server listening on {addr}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .map_err(|e| FolioError::Server {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("Gateway server stopped");
    Ok(())
}

/// Bind and serve the gateway until `cancel` fires.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    cancel: CancellationToken,
) -> Result<(), FolioError> {
    let listener = bind(config).await?;
    serve(listener, build_router(config, state), cancel).await
}
