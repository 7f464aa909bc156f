// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based reply selection.
//!
//! Each persona owns an ordered rule table. A message is lower-cased once and
//! tested against the active persona's rules with plain substring checks;
//! the first rule with a matching keyword wins. Personas never consult each
//! other's tables, and every persona shares the same fallback.

use async_trait::async_trait;
use folio_core::{ChatRequest, FolioError, Mode, Responder};

use crate::replies;

/// One entry of a persona's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Short identifier, used in logs.
    pub name: &'static str,
    /// Lower-case substrings; any one of them triggers the rule.
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Career and mentor personas share this table.
const CAREER_RULES: &[Rule] = &[
    Rule {
        name: "resume",
        keywords: &["resume", "cv"],
        reply: replies::RESUME_ADVICE,
    },
    Rule {
        name: "interview",
        keywords: &["placement", "interview"],
        reply: replies::INTERVIEW_PREP,
    },
    Rule {
        name: "project",
        keywords: &["project", "placementprep"],
        reply: replies::PROJECT_OVERVIEW,
    },
    Rule {
        name: "leadership",
        keywords: &["leadership", "team"],
        reply: replies::LEADERSHIP,
    },
];

const DEVELOPER_RULES: &[Rule] = &[
    Rule {
        name: "tech_stack",
        keywords: &["tech stack", "technology"],
        reply: replies::TECH_STACK,
    },
    Rule {
        name: "ai",
        keywords: &["ai", "machine learning"],
        reply: replies::AI_EXPERIENCE,
    },
    Rule {
        name: "system_design",
        keywords: &["system design", "architecture"],
        reply: replies::SYSTEM_DESIGN,
    },
];

const DESIGNER_RULES: &[Rule] = &[Rule {
    name: "design",
    keywords: &["ui", "ux", "design"],
    reply: replies::DESIGN_APPROACH,
}];

/// The ordered rule table consulted for `mode`.
pub fn rules_for(mode: Mode) -> &'static [Rule] {
    match mode {
        Mode::Career | Mode::Mentor => CAREER_RULES,
        Mode::Developer => DEVELOPER_RULES,
        Mode::Designer => DESIGNER_RULES,
    }
}

/// Outcome of selecting a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Name of the matching rule; `None` means the fallback was used.
    pub rule: Option<&'static str>,
    pub reply: &'static str,
}

/// Stateless, rule-based reply selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSelector;

impl ResponseSelector {
    pub fn new() -> Self {
        Self
    }

    /// Select the reply for `message` under `mode`.
    pub fn select(&self, message: &str, mode: Mode) -> &'static str {
        self.classify(message, Some(mode)).reply
    }

    /// Select a reply, reporting which rule fired.
    ///
    /// `mode == None` stands for a persona the service does not recognize;
    /// it always yields the fallback.
    pub fn classify(&self, message: &str, mode: Option<Mode>) -> Selection {
        let Some(mode) = mode else {
            return Selection {
                rule: None,
                reply: replies::FALLBACK,
            };
        };

        let lowered = message.to_lowercase();
        rules_for(mode)
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| Selection {
                rule: Some(rule.name),
                reply: rule.reply,
            })
            .unwrap_or(Selection {
                rule: None,
                reply: replies::FALLBACK,
            })
    }
}

#[async_trait]
impl Responder for ResponseSelector {
    fn name(&self) -> &str {
        "rule-based"
    }

    async fn respond(&self, request: &ChatRequest) -> Result<String, FolioError> {
        let selection = self.classify(&request.message, request.mode);
        tracing::debug!(
            mode = ?request.mode,
            rule = selection.rule.unwrap_or("fallback"),
            history_len = request.history.len(),
            "selected reply"
        );
        Ok(selection.reply.to_string())
    }
}
