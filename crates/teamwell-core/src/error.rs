// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Teamwell.

use thiserror::Error;

use crate::types::SourceKind;

/// The error type shared by transports, adapters, and configuration.
///
/// Adapters never hand this to the collection cycle directly; they fold it
/// into a [`FetchOutcome`](crate::FetchOutcome) so one failing platform
/// cannot abort the others.
#[derive(Debug, Error)]
pub enum TeamwellError {
    /// Configuration errors (invalid values, unusable credentials).
    #[error("configuration error: {0}")]
    Config(String),

    /// The platform credential is still a placeholder.
    #[error("{source_kind} source is not configured")]
    NotConfigured { source_kind: SourceKind },

    /// Network-level failure talking to a platform.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The platform answered with an error status or an error body.
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A response body could not be decoded.
    #[error("parse error: {message}")]
    Parse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TeamwellError {
    /// Returns true for failures worth one retry (rate limiting, server-side hiccups).
    pub fn is_transient(&self) -> bool {
        match self {
            TeamwellError::Api { status, .. } => matches!(status, 429 | 500 | 502 | 503),
            TeamwellError::Timeout { .. } => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for TeamwellError {
    fn from(e: serde_json::Error) -> Self {
        TeamwellError::Parse {
            message: e.to_string(),
            source: Some(Box::new(e)),
        }
    }
}
