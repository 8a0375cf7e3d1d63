//! Main entry point for the orchestrator binary
//!
//! Loads the roster, runs every seating round, writes the exports and then
//! serves the final state read-only until interrupted.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;

use orchestrator::{
    config::{DEFAULT_KITCHEN_STAFF, DEFAULT_MAX_DEFERRALS, DEFAULT_ROUNDS, DEFAULT_TABLES},
    services::RealFileSystem,
    Orchestrator, OrchestratorError, OrchestratorResult, SeatingConfig,
};
use shared::{logging, process_info, ProcessId, SnapshotHandle};
use webserver::WebServer;

/// Seats a roster across dinner rounds without repeat table-mates
#[derive(Parser, Debug)]
#[command(name = "orchestrator")]
#[command(about = "Assigns people to dinner tables and staff roles across several rounds")]
pub struct Args {
    /// Roster CSV: last name, first name per line
    #[arg(long, default_value = "roster.csv")]
    pub roster: PathBuf,

    /// Output directory for round and summary CSV files
    #[arg(long, default_value = "./output")]
    pub output: PathBuf,

    /// Number of tables
    #[arg(long, default_value_t = DEFAULT_TABLES)]
    pub tables: usize,

    /// Kitchen staff slots per round
    #[arg(long, default_value_t = DEFAULT_KITCHEN_STAFF)]
    pub kitchen: usize,

    /// Waiter staff slots per round (defaults to one per table)
    #[arg(long)]
    pub waiters: Option<usize>,

    /// Number of rounds to run
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: u32,

    /// Seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Deferral ceiling per round before the round is declared infeasible
    #[arg(long, default_value_t = DEFAULT_MAX_DEFERRALS)]
    pub max_deferrals: usize,

    /// Bind address for the read-only HTTP view
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Exit after exporting instead of serving the results
    #[arg(long)]
    pub no_serve: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    fn seating_config(&self) -> SeatingConfig {
        let waiters = self.waiters.unwrap_or(self.tables);
        let config = SeatingConfig::new(self.tables, self.kitchen, waiters, self.rounds)
            .with_max_deferrals(self.max_deferrals);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> OrchestratorResult<()> {
    let args = Args::parse();

    ProcessId::init_orchestrator();
    logging::init_tracing_with_level(Some(&args.log_level));

    let bind_address: SocketAddr = args
        .bind
        .parse()
        .map_err(|e| OrchestratorError::config(format!("Invalid bind address {}: {}", args.bind, e)))?;

    let file_system = RealFileSystem::new(args.roster.clone(), args.output.clone());
    let snapshot = SnapshotHandle::new();
    let mut orchestrator = Orchestrator::new(args.seating_config(), file_system.clone(), file_system, snapshot.clone())?;

    if let Err(err) = run_batch(&mut orchestrator).await {
        logging::log_error(ProcessId::current(), "Seating run", &err);
        return Err(err);
    }

    if args.no_serve {
        logging::log_success(ProcessId::current(), "Exports written, not serving");
        return Ok(());
    }

    process_info!(ProcessId::current(), "🌐 Serving results on http://{}", bind_address);
    WebServer::new(bind_address, snapshot).run_until(shutdown_signal()).await?;

    logging::log_success(ProcessId::current(), "Orchestrator stopped gracefully");
    Ok(())
}

async fn run_batch(orchestrator: &mut Orchestrator<RealFileSystem, RealFileSystem>) -> OrchestratorResult<()> {
    orchestrator.load_roster().await?;
    let summary = orchestrator.run().await?;
    if !summary.skipped.is_empty() {
        let rounds: Vec<String> = summary.skipped.iter().map(|skipped| skipped.round.to_string()).collect();
        logging::log_progress(
            ProcessId::current(),
            "Rounds needing attention",
            &format!("{} (infeasible seating)", rounds.join(", ")),
        );
    }
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
        Err(err) => logging::log_error(ProcessId::current(), "Signal handling", &err),
    }
}
