// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as valid bind hosts, well-formed route prefixes, and sane limits.

use crate::diagnostic::ConfigError;
use crate::model::FolioConfig;

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Upper bound on the artificial chat delay.
pub const MAX_RESPONSE_DELAY_MS: u64 = 60_000;

/// Smallest upload limit that still fits a one-page text resume.
pub const MIN_UPLOAD_BYTES: usize = 1024;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &FolioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let host = config.server.host.trim();
    if host.is_empty() {
        fail("server.host must not be empty".to_string());
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            fail(format!(
                "server.host `{host}` is not a valid IP address or hostname"
            ));
        }
    }

    let base = &config.server.base_path;
    if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
        fail(format!(
            "server.base_path `{base}` must start with `/` and must not end with `/`"
        ));
    }

    if config.chat.response_delay_ms > MAX_RESPONSE_DELAY_MS {
        fail(format!(
            "chat.response_delay_ms must be at most {MAX_RESPONSE_DELAY_MS}, got {}",
            config.chat.response_delay_ms
        ));
    }

    if config.chat.max_message_chars == 0 {
        fail("chat.max_message_chars must be at least 1".to_string());
    }

    if config.resume.max_upload_bytes < MIN_UPLOAD_BYTES {
        fail(format!(
            "resume.max_upload_bytes must be at least {MIN_UPLOAD_BYTES}, got {}",
            config.resume.max_upload_bytes
        ));
    }

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        fail(format!(
            "logging.level `{}` must be one of: {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &FolioConfig) -> Vec<String> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&FolioConfig::default()).is_ok());
    }

    #[test]
    fn empty_host_fails_validation() {
        let mut config = FolioConfig::default();
        config.server.host = "  ".to_string();
        assert!(messages(&config).iter().any(|m| m.contains("server.host")));
    }

    #[test]
    fn garbage_host_fails_validation() {
        let mut config = FolioConfig::default();
        config.server.host = "local host!".to_string();
        assert!(messages(&config).iter().any(|m| m.contains("not a valid IP")));
    }

    #[test]
    fn trailing_slash_base_path_fails() {
        let mut config = FolioConfig::default();
        config.server.base_path = "/api/v1/".to_string();
        assert!(messages(&config).iter().any(|m| m.contains("base_path")));
    }

    #[test]
    fn empty_base_path_is_allowed() {
        let mut config = FolioConfig::default();
        config.server.base_path = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn collects_every_failure() {
        let mut config = FolioConfig::default();
        config.chat.max_message_chars = 0;
        config.chat.response_delay_ms = MAX_RESPONSE_DELAY_MS + 1;
        config.resume.max_upload_bytes = 10;
        config.logging.level = "loud".to_string();
        assert_eq!(validate_config(&config).unwrap_err().len(), 4);
    }
}
