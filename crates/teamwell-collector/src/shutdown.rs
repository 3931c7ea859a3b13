// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Signal handling for the long-running service.

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Installs handlers for SIGTERM and SIGINT.
///
/// Returns a [`CancellationToken`] cancelled when either signal arrives. A
/// handler that cannot be installed is logged and never fires; if neither
/// can be installed the token is only cancelled by its other holders.
pub fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let sigterm = async {
                match signal(SignalKind::terminate()) {
                    Ok(mut sigterm) => {
                        sigterm.recv().await;
                    }
                    Err(e) => {
                        error!(error = %e, "failed to install SIGTERM handler");
                        std::future::pending::<()>().await;
                    }
                }
            };
            tokio::select! {
                _ = ctrl_c() => info!("received SIGINT (Ctrl+C), shutting down"),
                _ = sigterm => info!("received SIGTERM, shutting down"),
            }
        }

        #[cfg(not(unix))]
        {
            ctrl_c().await;
            info!("received Ctrl+C, shutting down");
        }

        trigger.cancel();
        debug!("shutdown signal handler completed");
    });

    token
}

/// Resolves on Ctrl+C. Pends forever if the handler cannot be installed,
/// so an install failure never reads as a signal.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
