// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio ask` command implementation.
//!
//! Answers one message locally with the rule-based responder. With
//! `--transcript` the conversation is read from and written back to a JSON
//! file, so repeated calls keep the same session id and history.

use std::path::PathBuf;

use colored::Colorize;
use folio_assistant::ResponseSelector;
use folio_config::FolioConfig;
use folio_core::session::resolve_session_id;
use folio_core::{ChatResponse, Conversation, FolioError, Mode, Responder};
use tracing::debug;

/// Arguments for `folio ask`.
#[derive(Debug, Clone)]
pub struct AskArgs {
    /// Overrides the transcript's persona when given.
    pub mode: Option<Mode>,
    pub transcript: Option<PathBuf>,
    pub agent: bool,
    pub name: Option<String>,
    pub message: String,
}

/// Runs the `folio ask` command.
pub async fn run_ask(config: &FolioConfig, args: AskArgs) -> Result<(), FolioError> {
    crate::serve::init_tracing(&config.logging.level);

    let mut conversation = match &args.transcript {
        Some(path) => Conversation::load_or_new(path, args.mode.unwrap_or_default())?,
        None => Conversation::new(args.mode.unwrap_or_default()),
    };

    let response = answer(&mut conversation, &args, config.chat.max_message_chars).await?;

    println!(
        "{} {}",
        format!("folio ({})", conversation.mode).bold().cyan(),
        format!("[{}]", response.session_id).dimmed()
    );
    println!("{}", response.response);

    if let Some(path) = &args.transcript {
        conversation.save(path)?;
        debug!(path = %path.display(), turns = conversation.messages.len(), "transcript saved");
    }
    Ok(())
}

/// Apply `args` to `conversation`, run the responder, and record the reply.
async fn answer(
    conversation: &mut Conversation,
    args: &AskArgs,
    max_message_chars: usize,
) -> Result<ChatResponse, FolioError> {
    if args.message.is_empty() {
        return Err(FolioError::Validation(
            folio_core::types::MESSAGE_REQUIRED.to_string(),
        ));
    }
    if args.message.chars().count() > max_message_chars {
        return Err(FolioError::Validation(format!(
            "Message must be at most {max_message_chars} characters"
        )));
    }

    if let Some(mode) = args.mode {
        conversation.mode = mode;
    }
    if let Some(name) = &args.name {
        conversation.user_name = Some(name.clone());
    }

    let request = conversation.to_request(args.message.clone(), args.agent);
    let reply = ResponseSelector::new().respond(&request).await?;
    let response = ChatResponse {
        response: reply,
        session_id: resolve_session_id(request.session_id.as_deref()),
    };
    conversation.apply_response(&response);
    Ok(response)
}
