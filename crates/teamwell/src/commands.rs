// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot commands. Each prints JSON to stdout.

use serde::Serialize;
use teamwell_collector::CycleReport;
use teamwell_core::{HostIssue, ProjectStatistics, RepositoryStatistics, TeamwellError, TrackerIssue};
use teamwell_store::StoreStats;

use crate::wiring::App;

#[derive(Debug, Serialize)]
struct CollectOutput {
    report: CycleReport,
    store: StoreStats,
}

#[derive(Debug, Serialize)]
struct StatsOutput {
    tracker: Option<ProjectStatistics>,
    host: Option<RepositoryStatistics>,
}

#[derive(Debug, Serialize)]
struct AssignedOutput<'a> {
    user: &'a str,
    tracker_issues: Vec<TrackerIssue>,
    host_issues: Vec<HostIssue>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), TeamwellError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn collect(app: &App) -> Result<(), TeamwellError> {
    let report = app.cycle.run_cycle().await;
    print_json(&CollectOutput {
        report,
        store: app.cycle.store_stats(),
    })
}

pub async fn test_connections(app: &App) -> Result<(), TeamwellError> {
    print_json(&app.cycle.test_all_connections().await)
}

pub async fn wellbeing(app: &App) -> Result<(), TeamwellError> {
    print_json(&app.cycle.analyze_wellbeing().await)
}

pub async fn channels(app: &App) -> Result<(), TeamwellError> {
    print_json(&app.slack.list_channels().await)
}

pub async fn stats(app: &App) -> Result<(), TeamwellError> {
    let (tracker, host) = tokio::join!(
        app.jira.project_statistics(),
        app.github.repository_statistics()
    );
    print_json(&StatsOutput { tracker, host })
}

pub async fn assigned(app: &App, user: &str) -> Result<(), TeamwellError> {
    let (tracker_issues, host_issues) = tokio::join!(
        app.jira.issues_for_assignee(user),
        app.github.open_issues_for_assignee(user)
    );
    print_json(&AssignedOutput {
        user,
        tracker_issues,
        host_issues,
    })
}
