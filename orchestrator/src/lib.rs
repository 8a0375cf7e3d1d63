//! Orchestrator library for multi-round dinner seating
//!
//! Seats a fixed roster at tables across several rounds so that nobody
//! shares a table with someone they have already met, rotates kitchen and
//! waiter duty towards whoever has served least, and exports every round.

pub mod config;
pub mod core;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::SeatingConfig;
pub use core::{Person, RoundState, Roster, RosterEntry, SeatAssigner, Table};
pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::{Orchestrator, RoundReport, RunSummary, SkippedRound};
pub use traits::{ResultSink, RosterSource};
