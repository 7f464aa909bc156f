// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Folio assistant.
//!
//! Serves the chat and resume-review endpoints over axum. Reply generation is
//! delegated to a [`Responder`] and a [`Reviewer`], so the gateway itself only
//! handles validation, pacing, session ids, and error mapping.

pub mod error;
pub mod handlers;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use folio_core::{FolioError, Responder, Reviewer};
use tokio_util::sync::CancellationToken;

pub use error::{ApiError, ErrorResponse};
pub use handlers::HealthResponse;
pub use server::{ChatSettings, GatewayState, HealthState, ServerConfig};

/// Gateway configuration.
///
/// Mirrors the relevant parts of `FolioConfig` from `folio-config` to avoid a
/// dependency on the config crate from the gateway crate.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub host: String,
    pub port: u16,
    pub base_path: String,
    pub cors_permissive: bool,
    /// Delay before each chat reply, in milliseconds.
    pub response_delay_ms: u64,
    pub max_message_chars: usize,
    pub max_upload_bytes: usize,
}

/// A configured gateway, ready to be served.
pub struct Gateway {
    server: ServerConfig,
    state: GatewayState,
}

impl Gateway {
    /// Create a gateway backed by `responder` and `reviewer`.
    pub fn new(
        settings: GatewaySettings,
        responder: Arc<dyn Responder>,
        reviewer: Arc<dyn Reviewer>,
    ) -> Self {
        let server = ServerConfig {
            host: settings.host,
            port: settings.port,
            base_path: settings.base_path,
            cors_permissive: settings.cors_permissive,
            max_upload_bytes: settings.max_upload_bytes,
        };
        let state = GatewayState {
            responder,
            reviewer,
            chat: ChatSettings {
                response_delay: Duration::from_millis(settings.response_delay_ms),
                max_message_chars: settings.max_message_chars,
            },
            health: HealthState {
                start_time: std::time::Instant::now(),
            },
        };
        Self { server, state }
    }

    /// The axum router for this gateway.
    pub fn router(&self) -> Router {
        server::build_router(&self.server, self.state.clone())
    }

    /// Bind and serve until `cancel` fires.
    pub async fn run(self, cancel: CancellationToken) -> Result<(), FolioError> {
        tracing::info!(
            responder = self.state.responder.name(),
            reviewer = self.state.reviewer.name(),
            base_path = %self.server.base_path,
            "starting gateway"
        );
        server::start_server(&self.server, self.state, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_assistant::{ResponseSelector, ResumeReviewer};

    #[test]
    fn gateway_maps_settings() {
        let gateway = Gateway::new(
            GatewaySettings {
                host: "0.0.0.0".into(),
                port: 8080,
                base_path: "/api/v1".into(),
                cors_permissive: false,
                response_delay_ms: 250,
                max_message_chars: 100,
                max_upload_bytes: 2048,
            },
            Arc::new(ResponseSelector::new()),
            Arc::new(ResumeReviewer::new()),
        );
        assert_eq!(gateway.server.port, 8080);
        assert_eq!(gateway.server.max_upload_bytes, 2048);
        assert_eq!(gateway.state.chat.response_delay, Duration::from_millis(250));
        assert_eq!(gateway.state.chat.max_message_chars, 100);
        let _router = gateway.router();
    }
}
