// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Folio portfolio assistant.
//!
//! This crate provides the wire types, error type, session-id helpers, and the
//! responder traits shared by the assistant, gateway, and CLI crates.

pub mod conversation;
pub mod error;
pub mod session;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use conversation::Conversation;
pub use error::FolioError;
pub use traits::{Responder, Reviewer};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, Mode, ResumeFile, ResumeReviewRequest,
    ReviewFeedback, Role,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folio_error_has_all_variants() {
        let _config = FolioError::Config("test".into());
        let _validation = FolioError::Validation("test".into());
        let _io = FolioError::Io(std::io::Error::other("test"));
        let _server = FolioError::Server {
            message: "test".into(),
            source: None,
        };
        let _internal = FolioError::Internal("test".into());
    }

    #[test]
    fn mode_has_four_variants() {
        assert_eq!(Mode::ALL.len(), 4);
        assert_eq!(Mode::default(), Mode::Career);
    }

    #[test]
    fn traits_are_object_safe() {
        fn _assert_responder(_: &dyn Responder) {}
        fn _assert_reviewer(_: &dyn Reviewer) {}
    }
}
