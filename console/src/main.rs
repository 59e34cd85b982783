//! Roster Console - terminal front end for the Roster record manager.
//!
//! Reads operator commands from stdin, forwards them to the engine's event
//! table and draws the results as text on stdout. Logs go to stderr.

mod app;
mod commands;
mod config;
mod error;
mod terminal;

use crate::config::Config;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env may carry RUST_LOG, so load it before the subscriber
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_console=info,roster_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let store = app::load_store(&config)?;
    tracing::info!(records = store.len(), "starting roster console");

    let stdin = io::stdin();
    app::run(&config, store, stdin.lock(), io::stdout())?;
    Ok(())
}
