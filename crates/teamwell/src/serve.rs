// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `teamwell serve` command implementation.
//!
//! Starts the collection scheduler and blocks until SIGINT/SIGTERM, then
//! stops the scheduler, letting an in-flight cycle finish.

use std::sync::Arc;

use teamwell_collector::{shutdown, CollectionScheduler};
use teamwell_config::model::SchedulingConfig;
use teamwell_core::TeamwellError;
use tracing::info;

use crate::wiring::App;

/// Runs the `teamwell serve` command.
pub async fn run_serve(app: App, scheduling: &SchedulingConfig) -> Result<(), TeamwellError> {
    info!("starting teamwell serve");

    let token = shutdown::install_signal_handler();
    let scheduler =
        CollectionScheduler::start_with_token(Arc::clone(&app.cycle), scheduling, token.clone());
    if scheduler.is_none() {
        info!("no scheduled collection, waiting for shutdown signal");
    }

    token.cancelled().await;

    if let Some(scheduler) = scheduler {
        scheduler.stop().await;
    }

    let stats = app.cycle.store_stats();
    info!(
        cycles = app.cycle.cycles_completed(),
        stored = stats.total,
        "teamwell stopped"
    );
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("teamwell={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
