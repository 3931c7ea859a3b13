// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base URL policy for platform endpoints.

use teamwell_core::TeamwellError;

/// Accept a platform base URL only if it is HTTPS, or plain HTTP to loopback.
///
/// Credentials travel in headers on every request, so a remote plaintext
/// endpoint is a configuration error.
pub fn validate_base_url(raw: &str) -> Result<(), TeamwellError> {
    let parsed = reqwest::Url::parse(raw)
        .map_err(|e| TeamwellError::Config(format!("invalid URL `{raw}`: {e}")))?;

    let host = parsed.host_str().unwrap_or("");
    if is_localhost(host) {
        return Ok(());
    }

    match parsed.scheme() {
        "https" => Ok(()),
        other => Err(TeamwellError::Config(format!(
            "`{raw}` uses {other}; remote platform endpoints must use https"
        ))),
    }
}

/// True for loopback hosts.
pub fn is_localhost(host: &str) -> bool {
    matches!(host, "localhost" | "::1" | "[::1]") || host.starts_with("127.")
}
