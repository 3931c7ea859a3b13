// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./teamwell.toml` > `~/.config/teamwell/teamwell.toml` > `/etc/teamwell/teamwell.toml`
//! with environment variable overrides via `TEAMWELL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TeamwellConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/teamwell/teamwell.toml` (system-wide)
/// 3. `~/.config/teamwell/teamwell.toml` (user XDG config)
/// 4. `./teamwell.toml` (local directory)
/// 5. `TEAMWELL_*` environment variables
pub fn load_config() -> Result<TeamwellConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<TeamwellConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TeamwellConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TeamwellConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TeamwellConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the layered Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TeamwellConfig::default()))
        .merge(Toml::file("/etc/teamwell/teamwell.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("teamwell/teamwell.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("teamwell.toml"))
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that underscore-containing
/// keys survive: `TEAMWELL_SLACK_BOT_TOKEN` maps to `slack.bot_token`, not
/// `slack.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("TEAMWELL_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("agent_", "agent.", 1)
            .replacen("slack_", "slack.", 1)
            .replacen("github_", "github.", 1)
            .replacen("jira_", "jira.", 1)
            .replacen("scheduling_", "scheduling.", 1)
            .replacen("collection_", "collection.", 1)
            .replacen("http_", "http.", 1);
        mapped.into()
    })
}
