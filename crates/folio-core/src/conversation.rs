// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caller-owned conversation context.
//!
//! The service is stateless. Whoever drives a conversation (a browser, the
//! `folio ask` command) keeps a [`Conversation`], turns it into requests, and
//! folds responses back into it. Persisting it is the caller's business.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, Mode, Role};

/// Transcript plus the identity bits a client sends with every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Append a user turn and return it.
    pub fn push_user(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.push(Role::User, content.into())
    }

    /// Append an assistant turn and return it.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.push(Role::Assistant, content.into())
    }

    fn push(&mut self, role: Role, content: String) -> &ChatMessage {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
        // Just pushed, so the vector is non-empty.
        &self.messages[self.messages.len() - 1]
    }

    /// Record `message` as a user turn and build the request that carries it.
    ///
    /// The request history includes the new turn, matching what the
    /// portfolio front end sends.
    pub fn to_request(&mut self, message: impl Into<String>, agent_mode: bool) -> ChatRequest {
        let message = message.into();
        self.push_user(message.clone());
        ChatRequest {
            message,
            history: self.messages.clone(),
            mode: Some(self.mode),
            session_id: self.session_id.clone(),
            user_name: self.user_name.clone(),
            agent_mode: Some(agent_mode),
        }
    }

    /// Adopt the session id from `response` and record the reply.
    pub fn apply_response(&mut self, response: &ChatResponse) {
        self.session_id = Some(response.session_id.clone());
        self.push_assistant(response.response.clone());
    }

    /// Load a conversation saved with [`Conversation::save`].
    ///
    /// A missing file yields a fresh conversation in `mode`.
    pub fn load_or_new(path: &Path, mode: Mode) -> Result<Self, FolioError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new(mode)),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the conversation as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), FolioError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_history_and_identity() {
        let mut convo = Conversation::new(Mode::Developer);
        convo.user_name = Some("Visitor".into());
        convo.session_id = Some("abc".into());

        let req = convo.to_request("what is your tech stack?", true);
        assert_eq!(req.message, "what is your tech stack?");
        assert_eq!(req.mode, Some(Mode::Developer));
        assert_eq!(req.session_id.as_deref(), Some("abc"));
        assert_eq!(req.user_name.as_deref(), Some("Visitor"));
        assert_eq!(req.agent_mode, Some(true));
        assert_eq!(req.history.len(), 1);
        assert_eq!(req.history[0].role, Role::User);
    }

    #[test]
    fn response_updates_session_and_transcript() {
        let mut convo = Conversation::new(Mode::Career);
        convo.to_request("hi", false);
        convo.apply_response(&ChatResponse {
            response: "hello".into(),
            session_id: "session_1_abcdefghi".into(),
        });

        assert_eq!(convo.session_id.as_deref(), Some("session_1_abcdefghi"));
        assert_eq!(convo.messages.len(), 2);
        assert_eq!(convo.messages[1].role, Role::Assistant);
        assert_eq!(convo.messages[1].content, "hello");
        assert_ne!(convo.messages[0].id, convo.messages[1].id);
    }

    #[test]
    fn timestamps_are_rfc3339() {
        let mut convo = Conversation::default();
        let ts = convo.push_user("x").timestamp.clone();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut convo = Conversation::new(Mode::Mentor);
        convo.session_id = Some("s".into());
        let json = serde_json::to_value(&convo).unwrap();
        assert_eq!(json["sessionId"], "s");
        assert_eq!(json["mode"], "mentor");
        let back: Conversation = serde_json::from_value(json).unwrap();
        assert_eq!(back, convo);
    }
}
