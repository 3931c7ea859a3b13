// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound HTTP plumbing shared by the platform transports.
//!
//! Builds a reqwest client with a TLS 1.2 floor and a bounded request
//! timeout, enforces HTTPS for remote base URLs, and retries transient
//! failures (429, 5xx, timeouts) a configurable number of times.

pub mod client;
pub mod url_policy;

pub use client::{Auth, JsonClient};
pub use url_policy::{is_localhost, validate_base_url};
