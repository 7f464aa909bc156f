// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio serve` command implementation.
//!
//! Starts the HTTP gateway with the rule-based responder and resume reviewer,
//! and stops it gracefully on SIGINT or SIGTERM.

use std::sync::Arc;

use folio_assistant::{ResponseSelector, ResumeReviewer};
use folio_config::FolioConfig;
use folio_core::FolioError;
use folio_gateway::{Gateway, GatewaySettings};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Runs the `folio serve` command.
pub async fn run_serve(config: FolioConfig) -> Result<(), FolioError> {
    init_tracing(&config.logging.level);

    let cancel = install_signal_handler();
    let gateway = Gateway::new(
        gateway_settings(&config),
        Arc::new(ResponseSelector::new()),
        Arc::new(ResumeReviewer::new()),
    );

    info!(
        host = %config.server.host,
        port = config.server.port,
        delay_ms = config.chat.response_delay_ms,
        "folio serve starting"
    );
    gateway.run(cancel).await?;
    info!("folio serve shut down");
    Ok(())
}

/// Map the loaded configuration onto the gateway's settings.
fn gateway_settings(config: &FolioConfig) -> GatewaySettings {
    GatewaySettings {
        host: config.server.host.clone(),
        port: config.server.port,
        base_path: config.server.base_path.clone(),
        cors_permissive: config.server.cors_permissive,
        response_delay_ms: config.chat.response_delay_ms,
        max_message_chars: config.chat.max_message_chars,
        max_upload_bytes: config.resume.max_upload_bytes,
    }
}

/// Installs handlers for SIGTERM and SIGINT.
///
/// Returns a [`CancellationToken`] that is cancelled when either signal is received.
fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = ctrl_c => info!("received SIGINT (Ctrl+C), initiating shutdown"),
                        _ = sigterm.recv() => info!("received SIGTERM, initiating shutdown"),
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to install SIGTERM handler, listening for Ctrl+C only");
                    let _ = ctrl_c.await;
                    info!("received SIGINT (Ctrl+C), initiating shutdown");
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            info!("received Ctrl+C, initiating shutdown");
        }

        token_clone.cancel();
    });

    token
}

/// Initializes the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence when set. Output goes to stderr so it never
/// mixes with command output.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folio={log_level},warn")));

    // A subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_follow_config() {
        let config = folio_config::load_and_validate_str(
            "[server]\nport = 8080\nbase_path = \"/api\"\n\n[chat]\nresponse_delay_ms = 0\nmax_message_chars = 10\n\n[resume]\nmax_upload_bytes = 2048\n",
        )
        .unwrap();
        let settings = gateway_settings(&config);
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.base_path, "/api");
        assert_eq!(settings.response_delay_ms, 0);
        assert_eq!(settings.max_message_chars, 10);
        assert_eq!(settings.max_upload_bytes, 2048);
        assert!(settings.cors_permissive);
    }

    #[test]
    fn default_settings_keep_one_second_delay() {
        let config = folio_config::load_and_validate_str("").unwrap();
        assert_eq!(gateway_settings(&config).response_delay_ms, 1000);
    }

    #[tokio::test]
    async fn signal_token_starts_uncancelled() {
        let token = install_signal_handler();
        assert!(!token.is_cancelled());
    }
}
