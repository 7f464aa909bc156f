// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based reply generation for the Folio assistant.
//!
//! This crate provides:
//! - [`ResponseSelector`]: persona-gated keyword rules picking a canned chat reply
//! - [`ResumeReviewer`]: checklist-driven resume feedback
//!
//! Both are pure, synchronous at heart, and implement the async traits from
//! `folio-core` so the gateway can hold them behind `Arc<dyn _>`.

pub mod replies;
pub mod review;
pub mod selector;

pub use review::{ResumeReviewer, ReviewReport};
pub use selector::{ResponseSelector, Rule, Selection, rules_for};
