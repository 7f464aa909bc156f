// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Folio assistant.

use thiserror::Error;

/// The primary error type shared by the responder traits and the service crates.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration errors (invalid TOML, bad values, unreadable files).
    #[error("configuration error: {0}")]
    Config(String),

    /// A request failed validation before reaching a responder.
    #[error("{0}")]
    Validation(String),

    /// Filesystem errors (transcript files, config files).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failures.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP server errors (bind failure, serve loop failure).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Returns true when the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, FolioError::Validation(_))
    }
}
