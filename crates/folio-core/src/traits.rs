// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seams between the HTTP layer and whatever produces replies.

use async_trait::async_trait;

use crate::error::FolioError;
use crate::types::{ChatRequest, ResumeReviewRequest, ReviewFeedback};

/// Produces the assistant's reply to a chat request.
///
/// Implementations receive the whole request, including fields such as
/// `history` and `agent_mode` that the rule-based selector ignores, so a
/// model-backed responder can slot in without changing the wire contract.
#[async_trait]
pub trait Responder: Send + Sync + 'static {
    /// Human-readable name, used in logs and the health endpoint.
    fn name(&self) -> &str;

    /// Returns the reply text for `request`.
    async fn respond(&self, request: &ChatRequest) -> Result<String, FolioError>;
}

/// Produces written feedback on a resume.
#[async_trait]
pub trait Reviewer: Send + Sync + 'static {
    fn name(&self) -> &str;

    async fn review(&self, request: &ResumeReviewRequest) -> Result<ReviewFeedback, FolioError>;
}
