// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that serde attributes cannot express:
//! positive intervals, non-empty scopes, bounded page sizes.

use crate::diagnostic::ConfigError;
use crate::model::TeamwellConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const MAX_PAGE_SIZE: u32 = 1000;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or every collected error
/// (does not fail fast).
pub fn validate_config(config: &TeamwellConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` must be one of {}",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.scheduling.data_collection_interval_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "scheduling.data_collection_interval_ms must be greater than 0".to_string(),
        });
    }

    let required = [
        ("slack.default_channel", &config.slack.default_channel),
        ("jira.project_key", &config.jira.project_key),
        ("github.owner", &config.github.owner),
        ("github.repository", &config.github.repository),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    let page_sizes = [
        ("slack.history_limit", config.slack.history_limit),
        ("jira.max_results", config.jira.max_results),
        ("github.max_issues", config.github.max_issues),
    ];
    for (key, value) in page_sizes {
        if value == 0 || value > MAX_PAGE_SIZE {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be between 1 and {MAX_PAGE_SIZE}, got {value}"),
            });
        }
    }

    if config.http.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "http.request_timeout_secs must be greater than 0".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
