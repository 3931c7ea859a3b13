// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Teamwell - team activity collection and wellbeing summaries.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;
mod serve;
mod wiring;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Teamwell - team activity collection and wellbeing summaries.
#[derive(Parser, Debug)]
#[command(name = "teamwell", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the lookup hierarchy.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Run scheduled collection until SIGINT/SIGTERM.
    Serve,
    /// Run one collection cycle now and print the report.
    Collect,
    /// Probe the credentials of every source.
    TestConnections,
    /// Classify the default chat channel.
    Wellbeing,
    /// List available chat channels.
    Channels,
    /// Print tracker project and host repository statistics.
    Stats,
    /// List open work assigned to a user in the tracker and on the host.
    Assigned {
        /// Tracker assignee name and host login.
        user: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => teamwell_config::load_and_validate_path(path),
        None => teamwell_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            teamwell_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    serve::init_tracing(&config.agent.log_level);

    let app = match wiring::App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_serve(app, &config.scheduling).await,
        Commands::Collect => commands::collect(&app).await,
        Commands::TestConnections => commands::test_connections(&app).await,
        Commands::Wellbeing => commands::wellbeing(&app).await,
        Commands::Channels => commands::channels(&app).await,
        Commands::Stats => commands::stats(&app).await,
        Commands::Assigned { user } => commands::assigned(&app, &user).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
