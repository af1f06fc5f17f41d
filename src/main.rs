//! rconsole - Entry point
//!
//! Parses CLI arguments, wires the terminal collector and the RCON
//! client into the session orchestrator, and races the whole run
//! against Ctrl+C so an interrupt at any point exits cleanly.

use std::sync::Arc;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rconsole::config::{Args, Config};
use rconsole::console::{ConsoleClient, SourceClient};
use rconsole::prompt::TerminalCollector;
use rconsole::session::SessionOrchestrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout belongs to the operator dialog
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_args(args);

    debug!(
        "rconsole v{} starting, timeout {}s",
        env!("CARGO_PKG_VERSION"),
        config.timeout.as_secs()
    );

    let client: Arc<dyn ConsoleClient> = Arc::new(SourceClient::new());
    let collector = TerminalCollector::new(&config);
    let mut orchestrator = SessionOrchestrator::new(collector, client, config.timeout);

    // Ctrl+C during a prompt, validation, or a command exchange cancels
    // the run; both paths exit with code 0.
    tokio::select! {
        result = orchestrator.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            // Runtime shutdown would wait on an in-flight blocking
            // stdin/password read until the next keypress, so leave
            // the process directly.
            println!();
            println!("exiting...");
            std::process::exit(0);
        }
    }

    println!("exiting...");
    Ok(())
}
