// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Teamwell.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup. Credential defaults are deliberate `your-...`
//! placeholders: an adapter whose credential still looks like one treats
//! its platform as not configured.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use teamwell_core::RepoRef;

/// Top-level Teamwell configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TeamwellConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Slack (chat) integration.
    #[serde(default)]
    pub slack: SlackConfig,

    /// GitHub (source host) integration.
    #[serde(default)]
    pub github: GithubConfig,

    /// Jira (issue tracker) integration.
    #[serde(default)]
    pub jira: JiraConfig,

    /// Periodic collection timer.
    #[serde(default)]
    pub scheduling: SchedulingConfig,

    /// What a collection cycle does with what it fetched.
    #[serde(default)]
    pub collection: CollectionConfig,

    /// Outbound HTTP settings shared by all transports.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "teamwell".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Slack integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SlackConfig {
    /// Bot token (`xoxb-...`).
    #[serde(default = "default_slack_bot_token")]
    pub bot_token: String,

    /// App-level token. Not used for polling, kept for parity with the Slack app setup.
    #[serde(default = "default_slack_app_token")]
    pub app_token: String,

    /// Channel name (without `#`) polled by default.
    #[serde(default = "default_slack_channel")]
    pub default_channel: String,

    /// Messages requested per history call.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,

    #[serde(default = "default_slack_api_url")]
    pub api_url: String,
}

impl SlackConfig {
    /// Placeholder check: configured unless the bot token is empty or starts with `your-slack`.
    pub fn is_configured(&self) -> bool {
        !is_placeholder(&self.bot_token, "your-slack")
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            bot_token: default_slack_bot_token(),
            app_token: default_slack_app_token(),
            default_channel: default_slack_channel(),
            history_limit: default_history_limit(),
            api_url: default_slack_api_url(),
        }
    }
}

fn default_slack_bot_token() -> String {
    "your-slack-bot-token".to_string()
}

fn default_slack_app_token() -> String {
    "your-slack-app-token".to_string()
}

fn default_slack_channel() -> String {
    "general".to_string()
}

fn default_history_limit() -> u32 {
    50
}

fn default_slack_api_url() -> String {
    "https://slack.com/api".to_string()
}

/// GitHub integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GithubConfig {
    #[serde(default = "default_github_token")]
    pub token: String,

    #[serde(default = "default_github_owner")]
    pub owner: String,

    #[serde(default = "default_github_repository")]
    pub repository: String,

    #[serde(default = "default_github_api_url")]
    pub api_url: String,

    /// Cap on issues taken from a single listing.
    #[serde(default = "default_max_issues")]
    pub max_issues: u32,
}

impl GithubConfig {
    /// Placeholder check: configured unless the token is empty or starts with `your-github`.
    pub fn is_configured(&self) -> bool {
        !is_placeholder(&self.token, "your-github")
    }

    pub fn repo_ref(&self) -> RepoRef {
        RepoRef::new(self.owner.clone(), self.repository.clone())
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: default_github_token(),
            owner: default_github_owner(),
            repository: default_github_repository(),
            api_url: default_github_api_url(),
            max_issues: default_max_issues(),
        }
    }
}

fn default_github_token() -> String {
    "your-github-token".to_string()
}

fn default_github_owner() -> String {
    "your-github-org".to_string()
}

fn default_github_repository() -> String {
    "your-repository".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_max_issues() -> u32 {
    50
}

/// Jira integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JiraConfig {
    /// Site base URL, e.g. `https://acme.atlassian.net`.
    #[serde(default = "default_jira_url")]
    pub url: String,

    #[serde(default = "default_jira_username")]
    pub username: String,

    /// API token used with `username` for basic auth.
    #[serde(default = "default_jira_token")]
    pub token: String,

    #[serde(default = "default_project_key")]
    pub project_key: String,

    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Custom field holding story points.
    #[serde(default = "default_story_points_field")]
    pub story_points_field: String,
}

impl JiraConfig {
    /// Placeholder check over all three credentials.
    pub fn is_configured(&self) -> bool {
        !is_placeholder(&self.url, "https://your-company")
            && !is_placeholder(&self.username, "your-jira")
            && !is_placeholder(&self.token, "your-jira")
    }
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            url: default_jira_url(),
            username: default_jira_username(),
            token: default_jira_token(),
            project_key: default_project_key(),
            max_results: default_max_results(),
            story_points_field: default_story_points_field(),
        }
    }
}

fn default_jira_url() -> String {
    "https://your-company.atlassian.net".to_string()
}

fn default_jira_username() -> String {
    "your-jira-username".to_string()
}

fn default_jira_token() -> String {
    "your-jira-api-token".to_string()
}

fn default_project_key() -> String {
    "PROJ".to_string()
}

fn default_max_results() -> u32 {
    50
}

fn default_story_points_field() -> String {
    "customfield_10016".to_string()
}

/// Collection timer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulingConfig {
    /// Whether `serve` starts the periodic timer at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Delay between the end of one cycle and the start of the next.
    #[serde(default = "default_interval_ms")]
    pub data_collection_interval_ms: u64,

    /// Delay before the first cycle.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
}

impl SchedulingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.data_collection_interval_ms)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            data_collection_interval_ms: default_interval_ms(),
            initial_delay_ms: default_initial_delay_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    300_000
}

fn default_initial_delay_ms() -> u64 {
    30_000
}

/// Collection cycle behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Upsert fetched records into the in-memory store.
    #[serde(default = "default_true")]
    pub persist: bool,

    /// Also fetch and log project/repository statistics each cycle.
    #[serde(default = "default_true")]
    pub include_statistics: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            include_statistics: true,
        }
    }
}

/// Outbound HTTP configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Retries on 429/5xx before giving up.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// True when `value` is empty or still carries the `your-...` placeholder prefix.
pub fn is_placeholder(value: &str, prefix: &str) -> bool {
    value.is_empty() || value.starts_with(prefix)
}
