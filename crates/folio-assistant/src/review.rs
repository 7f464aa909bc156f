// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic resume review.
//!
//! Runs a fixed checklist over the resume text (metrics, action verbs,
//! length, contact details, role keywords) and writes the findings as a
//! markdown list. Uploads whose text cannot be read (PDFs, images) get the
//! generic checklist instead.

use async_trait::async_trait;
use folio_core::{FolioError, ResumeReviewRequest, ReviewFeedback, Reviewer};

/// Strong verbs that should open achievement bullets.
const ACTION_VERBS: &[&str] = &[
    "led", "built", "optimized", "designed", "developed", "launched", "improved",
    "reduced", "increased", "delivered", "implemented", "mentored", "automated",
    "architected", "shipped",
];

/// Words too generic to count as role keywords.
const ROLE_STOPWORDS: &[&str] = &["and", "or", "of", "the", "a", "an", "for", "in", "at", "to"];

const MAX_WORDS: usize = 800;
const MIN_WORDS: usize = 150;

const GENERIC_CHECKLIST: &str = "\
- **Quantify achievements**: Use numbers and metrics to show impact
- **Tailor for the role**: Customize your resume for each application
- **Highlight relevant skills**: Match keywords from job descriptions
- **Keep it concise**: Aim for 1-2 pages maximum
- **Use action verbs**: Start bullet points with strong verbs like \"Led\", \"Built\", \"Optimized\"";

/// Findings for a single resume, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    pub word_count: usize,
    pub has_metrics: bool,
    pub action_verbs: Vec<&'static str>,
    pub has_email: bool,
    /// Role keywords present in and absent from the text. Empty when no role was given.
    pub role_hits: Vec<String>,
    pub role_misses: Vec<String>,
}

impl ReviewReport {
    /// Run the checklist over `text`, optionally against a target `role`.
    pub fn analyze(text: &str, role: Option<&str>) -> Self {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric() && c != '@' && c != '.' && c != '%')
            .map(|w| w.trim_matches('.'))
            .filter(|w| !w.is_empty())
            .collect();

        let has_metrics = text.chars().any(|c| c.is_ascii_digit() || c == '%');
        let action_verbs = ACTION_VERBS
            .iter()
            .copied()
            .filter(|verb| words.contains(verb))
            .collect();
        let has_email = words.iter().any(|w| looks_like_email(w));

        let mut role_hits = Vec::new();
        let mut role_misses = Vec::new();
        for keyword in role_keywords(role.unwrap_or_default()) {
            if lowered.contains(&keyword) {
                role_hits.push(keyword);
            } else {
                role_misses.push(keyword);
            }
        }

        Self {
            word_count: words.len(),
            has_metrics,
            action_verbs,
            has_email,
            role_hits,
            role_misses,
        }
    }

    /// Render the findings as markdown bullets.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        if self.has_metrics {
            lines.push("- **Quantified impact**: Good, your resume already uses numbers. Make sure every major bullet has one.".to_string());
        } else {
            lines.push("- **Quantify achievements**: I couldn't find any numbers. Add metrics such as users served, latency saved, or % improvement.".to_string());
        }

        if self.action_verbs.is_empty() {
            lines.push("- **Use action verbs**: Start bullet points with strong verbs like \"Led\", \"Built\", \"Optimized\".".to_string());
        } else {
            let verbs: Vec<String> = self.action_verbs.iter().map(|v| capitalize(v)).collect();
            lines.push(format!(
                "- **Action verbs**: Nice use of {}. Keep every bullet starting with one.",
                verbs.join(", ")
            ));
        }

        if self.word_count > MAX_WORDS {
            lines.push(format!(
                "- **Keep it concise**: At about {} words this likely runs past two pages. Trim older or less relevant items.",
                self.word_count
            ));
        } else if self.word_count < MIN_WORDS {
            lines.push(format!(
                "- **Add depth**: About {} words is thin. Expand on your projects, responsibilities, and outcomes.",
                self.word_count
            ));
        } else {
            lines.push(format!(
                "- **Length**: About {} words, a comfortable one to two pages.",
                self.word_count
            ));
        }

        if !self.has_email {
            lines.push(
                "- **Contact details**: Add an email address near the top so recruiters can reach you."
                    .to_string(),
            );
        }

        if !self.role_misses.is_empty() {
            lines.push(format!(
                "- **Tailor for the role**: Consider mentioning {} to match the job description.",
                self.role_misses.join(", ")
            ));
        } else if !self.role_hits.is_empty() {
            lines.push(
                "- **Tailoring**: Your resume already reflects the target role's keywords."
                    .to_string(),
            );
        }

        lines.join("\n")
    }
}

fn looks_like_email(word: &str) -> bool {
    word.split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
}

fn role_keywords(role: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for word in role
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .filter(|w| w.len() > 1 && !ROLE_STOPWORDS.contains(w))
    {
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }
    keywords
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rule-based [`Reviewer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeReviewer;

impl ResumeReviewer {
    pub fn new() -> Self {
        Self
    }

    /// Build feedback for `request`. Assumes it passed validation.
    pub fn feedback(&self, request: &ResumeReviewRequest) -> String {
        let greeting = match request.user_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("Thanks for sharing your resume, {name}!"),
            _ => "Thanks for sharing your resume!".to_string(),
        };
        let target = request
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty());
        let heading = match target {
            Some(role) => format!("Here's my feedback for a **{role}** application:"),
            None => "Here's my feedback:".to_string(),
        };

        let Some(text) = request.resume_text() else {
            return format!(
                "{greeting}\n\nI couldn't read the text of the uploaded document, so here is a general checklist to run it against:\n\n{GENERIC_CHECKLIST}\n\nPaste the resume text for a detailed review."
            );
        };

        let report = ReviewReport::analyze(text, target);
        format!(
            "{greeting} {heading}\n\n{}\n\nWould you like help rewriting any of these sections?",
            report.render()
        )
    }
}

#[async_trait]
impl Reviewer for ResumeReviewer {
    fn name(&self) -> &str {
        "rule-based"
    }

    async fn review(&self, request: &ResumeReviewRequest) -> Result<ReviewFeedback, FolioError> {
        request.validate()?;
        let feedback = self.feedback(request);
        tracing::debug!(
            has_text = request.text.is_some(),
            has_file = request.file.is_some(),
            "reviewed resume"
        );
        Ok(ReviewFeedback { feedback })
    }
}
