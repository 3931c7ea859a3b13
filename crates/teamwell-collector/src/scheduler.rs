// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-delay background scheduling of collection cycles.
//!
//! After an initial delay the first cycle runs; each following cycle starts
//! one interval after the previous one *finished*, so a slow cycle pushes the
//! schedule back instead of stacking runs.

use std::sync::Arc;
use std::time::Duration;

use teamwell_config::model::SchedulingConfig;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cycle::CollectionCycle;

/// How long [`CollectionScheduler::stop`] waits for an in-flight cycle.
pub const STOP_GRACE: Duration = Duration::from_secs(10);

/// Handle to the background loop. Dropping it leaves the loop running;
/// call [`stop`](Self::stop) to end it.
pub struct CollectionScheduler {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl CollectionScheduler {
    /// Spawn the loop, or return `None` when scheduling is disabled.
    pub fn start(cycle: Arc<CollectionCycle>, config: &SchedulingConfig) -> Option<Self> {
        Self::start_with_token(cycle, config, CancellationToken::new())
    }

    /// Like [`start`](Self::start), but stops when `token` is cancelled
    /// from outside as well.
    pub fn start_with_token(
        cycle: Arc<CollectionCycle>,
        config: &SchedulingConfig,
        token: CancellationToken,
    ) -> Option<Self> {
        if !config.enabled {
            info!("scheduled collection disabled");
            return None;
        }

        let initial_delay = config.initial_delay();
        let interval = config.interval();
        info!(
            initial_delay_ms = initial_delay.as_millis() as u64,
            interval_ms = interval.as_millis() as u64,
            "starting collection scheduler"
        );

        let loop_token = token.clone();
        let handle = tokio::spawn(async move {
            let mut delay = initial_delay;
            loop {
                tokio::select! {
                    _ = loop_token.cancelled() => break,
                    _ = tokio::time::sleep(delay) => {}
                }
                debug!("scheduled collection due");
                // Not raced with the token: an in-flight cycle is allowed to finish.
                cycle.run_cycle().await;
                if loop_token.is_cancelled() {
                    break;
                }
                delay = interval;
            }
            info!("collection scheduler stopped");
        });

        Some(Self { token, handle })
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancel future cycles and wait for the loop to exit.
    ///
    /// A cycle already running gets [`STOP_GRACE`] to complete before the
    /// task is aborted.
    pub async fn stop(self) {
        self.stop_within(STOP_GRACE).await;
    }

    pub async fn stop_within(self, grace: Duration) {
        self.token.cancel();
        let mut handle = self.handle;
        match tokio::time::timeout(grace, &mut handle).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, "collection scheduler task ended abnormally"),
            Err(_) => {
                warn!(grace_ms = grace.as_millis() as u64, "in-flight cycle did not finish, aborting");
                handle.abort();
            }
        }
    }
}
