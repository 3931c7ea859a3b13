// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub host source for Teamwell.
//!
//! Lists repository issues through the REST API, filters out pull requests,
//! and converts the rest into [`HostIssue`](teamwell_core::HostIssue) records.

pub mod adapter;
pub mod api;
pub mod client;
pub mod convert;

pub use adapter::GithubSource;
pub use api::{GithubApi, GithubRepository, GithubUser, StateFilter};
pub use client::HttpGithubApi;
