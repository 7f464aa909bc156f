// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire and domain types shared by the assistant, the gateway, and the CLI.
//!
//! Field names follow the JSON contract the portfolio front end already
//! speaks (`sessionId`, `userName`, `agentMode`), so every wire struct is
//! `camelCase` on the wire.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

use crate::error::FolioError;

/// Error text returned when a chat request has no usable message.
pub const MESSAGE_REQUIRED: &str = "Message is required and must be a string";

/// Conversation persona gating which keyword rules apply.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Developer,
    Designer,
    Mentor,
    #[default]
    Career,
}

impl Mode {
    /// Every persona, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Developer, Mode::Designer, Mode::Mentor, Mode::Career];
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry of a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// ISO-8601 timestamp.
    pub timestamp: String,
}

/// Body of `POST /ai/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,

    /// Prior transcript. Entries that do not parse as [`ChatMessage`] are dropped.
    #[serde(default, deserialize_with = "lenient_history")]
    pub history: Vec<ChatMessage>,

    /// Requested persona. Absent means [`Mode::Career`]; `None` means the
    /// client sent a persona this service does not know.
    #[serde(default = "default_mode", deserialize_with = "lenient_mode")]
    pub mode: Option<Mode>,

    /// A non-string value is treated as absent.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub session_id: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_mode: Option<bool>,
}

fn default_mode() -> Option<Mode> {
    Some(Mode::Career)
}

fn lenient_mode<'de, D>(deserializer: D) -> Result<Option<Mode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

fn lenient_history<'de, D>(deserializer: D) -> Result<Vec<ChatMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    let total = entries.len();
    let history: Vec<ChatMessage> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    if history.len() != total {
        tracing::debug!(
            dropped = total - history.len(),
            "ignoring malformed history entries"
        );
    }
    Ok(history)
}

impl ChatRequest {
    /// Build a request for `message` with every optional field at its default.
    pub fn new(message: impl Into<String>, mode: Mode) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
            mode: Some(mode),
            session_id: None,
            user_name: None,
            agent_mode: None,
        }
    }

    /// Decode a request from an arbitrary JSON body.
    ///
    /// `message` is checked before the rest of the body is decoded, so a
    /// missing, empty, or non-string message is always reported as
    /// [`MESSAGE_REQUIRED`].
    pub fn from_json(body: serde_json::Value) -> Result<Self, FolioError> {
        let has_message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|m| !m.is_empty());
        if !has_message {
            return Err(FolioError::Validation(MESSAGE_REQUIRED.to_string()));
        }
        serde_json::from_value(body)
            .map_err(|e| FolioError::Validation(format!("invalid chat request: {e}")))
    }
}

/// Body returned by `POST /ai/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

/// An uploaded resume document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    /// Returns the document text when the upload is plain UTF-8 text.
    ///
    /// PDFs and other binary formats yield `None`.
    pub fn text(&self) -> Option<&str> {
        let declared_text = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/"));
        let named_text = self.file_name.as_deref().is_some_and(|name| {
            let lower = name.to_lowercase();
            lower.ends_with(".txt") || lower.ends_with(".md")
        });
        if !declared_text && !named_text {
            return None;
        }
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Multipart body of `POST /ai/resume-review`, after extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeReviewRequest {
    pub file: Option<ResumeFile>,
    pub text: Option<String>,
    pub role: Option<String>,
    pub user_name: Option<String>,
}

impl ResumeReviewRequest {
    /// Check that the request carries something to review.
    pub fn validate(&self) -> Result<(), FolioError> {
        let has_text = self.text.as_deref().is_some_and(|t| !t.trim().is_empty());
        let has_file = self.file.as_ref().is_some_and(|f| !f.bytes.is_empty());
        if has_text || has_file {
            Ok(())
        } else {
            Err(FolioError::Validation(
                "Please upload a resume file or paste resume text".to_string(),
            ))
        }
    }

    /// The text to review: pasted text wins over a decodable upload.
    pub fn resume_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.file.as_ref().and_then(ResumeFile::text))
    }
}

/// Body returned by `POST /ai/resume-review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFeedback {
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mode_parses_lowercase_names() {
        for mode in Mode::ALL {
            let parsed: Mode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("Career".parse::<Mode>().is_err());
    }

    #[test]
    fn request_defaults_to_career() {
        let req = ChatRequest::from_json(json!({"message": "hi"})).unwrap();
        assert_eq!(req.mode, Some(Mode::Career));
        assert!(req.history.is_empty());
        assert!(req.session_id.is_none());
    }

    #[test]
    fn unknown_mode_is_not_an_error() {
        let req = ChatRequest::from_json(json!({"message": "hi", "mode": "pirate"})).unwrap();
        assert_eq!(req.mode, None);

        let req = ChatRequest::from_json(json!({"message": "hi", "mode": 7})).unwrap();
        assert_eq!(req.mode, None);

        let req = ChatRequest::from_json(json!({"message": "hi", "mode": null})).unwrap();
        assert_eq!(req.mode, None);
    }

    #[test]
    fn camel_case_fields_are_read() {
        let req = ChatRequest::from_json(json!({
            "message": "hello",
            "mode": "developer",
            "sessionId": "abc",
            "userName": "Visitor",
            "agentMode": true,
            "history": [
                {"id": "1", "role": "user", "content": "hey", "timestamp": "2026-01-01T00:00:00Z"}
            ]
        }))
        .unwrap();
        assert_eq!(req.mode, Some(Mode::Developer));
        assert_eq!(req.session_id.as_deref(), Some("abc"));
        assert_eq!(req.user_name.as_deref(), Some("Visitor"));
        assert_eq!(req.agent_mode, Some(true));
        assert_eq!(req.history.len(), 1);
        assert_eq!(req.history[0].role, Role::User);
    }

    #[test]
    fn malformed_history_entries_are_dropped() {
        let req = ChatRequest::from_json(json!({
            "message": "hello",
            "history": [
                {"id": "1", "role": "system", "content": "x", "timestamp": "t"},
                {"id": "2", "role": "assistant", "content": "ok", "timestamp": "t"},
                42
            ]
        }))
        .unwrap();
        assert_eq!(req.history.len(), 1);
        assert_eq!(req.history[0].id, "2");
    }

    #[test]
    fn wrong_typed_optional_fields_are_ignored() {
        let req = ChatRequest::from_json(json!({
            "message": "hello",
            "sessionId": 123,
            "userName": ["ada"],
            "agentMode": "yes"
        }))
        .unwrap();
        assert_eq!(req.session_id, None);
        assert_eq!(req.user_name, None);
        assert_eq!(req.agent_mode, None);

        let req = ChatRequest::from_json(json!({
            "message": "hello",
            "sessionId": null,
            "agentMode": true
        }))
        .unwrap();
        assert_eq!(req.session_id, None);
        assert_eq!(req.agent_mode, Some(true));
    }

    #[test]
    fn missing_or_bad_message_is_rejected() {
        for body in [
            json!({}),
            json!({"message": ""}),
            json!({"message": 12}),
            json!({"message": null}),
            json!("just a string"),
        ] {
            let err = ChatRequest::from_json(body).unwrap_err();
            assert_eq!(err.to_string(), MESSAGE_REQUIRED);
        }
    }

    #[test]
    fn response_serializes_camel_case() {
        let resp = ChatResponse {
            response: "hi".into(),
            session_id: "abc".into(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, json!({"response": "hi", "sessionId": "abc"}));
    }

    #[test]
    fn resume_file_text_only_for_text_uploads() {
        let txt = ResumeFile {
            file_name: Some("resume.txt".into()),
            content_type: None,
            bytes: b"Built things".to_vec(),
        };
        assert_eq!(txt.text(), Some("Built things"));

        let pdf = ResumeFile {
            file_name: Some("resume.pdf".into()),
            content_type: Some("application/pdf".into()),
            bytes: b"%PDF-1.7".to_vec(),
        };
        assert_eq!(pdf.text(), None);
    }

    #[test]
    fn review_request_requires_text_or_file() {
        assert!(ResumeReviewRequest::default().validate().is_err());

        let blank = ResumeReviewRequest {
            text: Some("   ".into()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let pasted = ResumeReviewRequest {
            text: Some("Led a team".into()),
            ..Default::default()
        };
        assert!(pasted.validate().is_ok());
        assert_eq!(pasted.resume_text(), Some("Led a team"));
    }
}
