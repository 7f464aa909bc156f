// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /ai/chat, POST /ai/resume-review, and GET /health.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
        rejection::BytesRejection,
    },
    http::StatusCode,
};
use folio_core::session::resolve_session_id;
use folio_core::{ChatRequest, ChatResponse, ResumeFile, ResumeReviewRequest, ReviewFeedback};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::server::GatewayState;

/// Response body for GET /health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the gateway state was created.
    pub uptime_secs: u64,
    /// Name of the active chat responder.
    pub responder: String,
}

/// POST /ai/chat
///
/// Validates the message, waits out the configured delay, and returns the
/// responder's reply together with the (echoed or generated) session id.
///
/// The body is parsed as JSON whatever its `Content-Type` says.
pub async fn post_chat(
    State(state): State<GatewayState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected chat body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    })?;
    let body: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "chat body is not valid JSON");
        ApiError::BadRequest(format!("Failed to parse the request body as JSON: {e}"))
    })?;

    let request = ChatRequest::from_json(body).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected chat request");
    })?;

    let max_chars = state.chat.max_message_chars;
    if request.message.chars().count() > max_chars {
        tracing::warn!(max_chars, "rejected oversized chat message");
        return Err(ApiError::BadRequest(format!(
            "Message must be at most {max_chars} characters"
        )));
    }

    if !state.chat.response_delay.is_zero() {
        tokio::time::sleep(state.chat.response_delay).await;
    }

    let response = state.responder.respond(&request).await.map_err(|e| {
        tracing::error!(error = %e, responder = state.responder.name(), "chat responder failed");
        ApiError::from(e)
    })?;

    let session_id = resolve_session_id(request.session_id.as_deref());
    tracing::debug!(session_id = %session_id, mode = ?request.mode, "chat reply ready");

    Ok(Json(ChatResponse {
        response,
        session_id,
    }))
}

/// POST /ai/resume-review
///
/// Accepts multipart fields `file`, `text`, `role`, and `userName`.
pub async fn post_resume_review(
    State(state): State<GatewayState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ReviewFeedback>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected resume upload");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let request = read_review_form(&mut multipart).await?;
    request.validate().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected resume review request");
    })?;

    let feedback = state.reviewer.review(&request).await.map_err(|e| {
        tracing::error!(error = %e, reviewer = state.reviewer.name(), "resume review failed");
        ApiError::from(e)
    })?;

    Ok(Json(feedback))
}

async fn read_review_form(multipart: &mut Multipart) -> Result<ResumeReviewRequest, ApiError> {
    let mut request = ResumeReviewRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::from_multipart)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(ApiError::from_multipart)?;
                request.file = Some(ResumeFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "text" => request.text = Some(field.text().await.map_err(ApiError::from_multipart)?),
            "role" => request.role = Some(field.text().await.map_err(ApiError::from_multipart)?),
            "userName" => {
                request.user_name = Some(field.text().await.map_err(ApiError::from_multipart)?);
            }
            other => tracing::debug!(field = other, "ignoring unknown multipart field"),
        }
    }

    Ok(request)
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
        responder: state.responder.name().to_string(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("not found".to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use folio_assistant::{ResponseSelector, ResumeReviewer};
    use tracing_test::traced_test;

    use super::*;
    use crate::server::{ChatSettings, HealthState};

    fn json_body(value: serde_json::Value) -> Result<Bytes, BytesRejection> {
        Ok(Bytes::from(value.to_string()))
    }

    fn state() -> GatewayState {
        GatewayState {
            responder: Arc::new(ResponseSelector::new()),
            reviewer: Arc::new(ResumeReviewer::new()),
            chat: ChatSettings {
                response_delay: Duration::ZERO,
                max_message_chars: 20,
            },
            health: HealthState {
                start_time: std::time::Instant::now(),
            },
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn missing_message_is_logged_and_rejected() {
        let result = post_chat(State(state()), json_body(serde_json::json!({}))).await;
        let err = result.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(logs_contain("rejected chat request"));
    }

    #[tokio::test]
    #[traced_test]
    async fn unparsable_body_is_rejected() {
        let body = Ok(Bytes::from_static(b"message=hello"));
        let err = post_chat(State(state()), body).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(logs_contain("chat body is not valid JSON"));
    }

    #[tokio::test]
    async fn oversized_message_is_rejected() {
        let body = serde_json::json!({"message": "x".repeat(21)});
        let err = post_chat(State(state()), json_body(body)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_echoes_session() {
        let body = serde_json::json!({"message": "resume", "sessionId": "abc"});
        let Json(resp) = post_chat(State(state()), json_body(body)).await.unwrap();
        assert_eq!(resp.session_id, "abc");
        assert!(resp.response.starts_with("Great question!"));
    }

    #[tokio::test(start_paused = true)]
    async fn chat_waits_for_configured_delay() {
        let mut state = state();
        state.chat.response_delay = Duration::from_secs(1);
        let started = tokio::time::Instant::now();
        let body = serde_json::json!({"message": "hello"});
        let _resp = post_chat(State(state), json_body(body)).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn health_reports_responder() {
        let Json(health) = get_health(State(state())).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.responder, "rule-based");
    }

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_secs: 42,
            responder: "rule-based".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptime_secs\":42"));
    }
}
