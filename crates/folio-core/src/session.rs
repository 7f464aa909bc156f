// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session identifier generation.
//!
//! Identifiers look like `session_1767225600000_k3j9x0q2a`: the Unix time in
//! milliseconds followed by nine base-36 characters. Clients treat them as
//! opaque strings.

use rand::Rng;

const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Generate a fresh session identifier.
pub fn generate_session_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("session_{millis}_{suffix}")
}

/// Echo a caller-supplied session id, or generate one when it is absent or empty.
pub fn resolve_session_id(supplied: Option<&str>) -> String {
    match supplied {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => generate_session_id(),
    }
}

/// Returns true if `id` has the shape produced by [`generate_session_id`].
pub fn is_generated_session_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix("session_") else {
        return false;
    };
    let Some((millis, suffix)) = rest.split_once('_') else {
        return false;
    };
    !millis.is_empty()
        && millis.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix.bytes().all(|b| SUFFIX_CHARSET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_expected_shape() {
        let id = generate_session_id();
        assert!(is_generated_session_id(&id), "unexpected id: {id}");
    }

    #[test]
    fn generated_ids_differ() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_ne!(a, b);
    }

    #[test]
    fn supplied_id_is_echoed() {
        assert_eq!(resolve_session_id(Some("abc")), "abc");
    }

    #[test]
    fn empty_id_is_replaced() {
        let id = resolve_session_id(Some(""));
        assert!(is_generated_session_id(&id));
        assert!(is_generated_session_id(&resolve_session_id(None)));
    }

    #[test]
    fn shape_check_rejects_foreign_ids() {
        assert!(!is_generated_session_id("abc"));
        assert!(!is_generated_session_id("session_12x_abcdefghi"));
        assert!(!is_generated_session_id("session_123_ABCDEFGHI"));
        assert!(!is_generated_session_id("session_123_short"));
    }
}
