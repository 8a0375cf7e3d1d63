//! Trait definitions with mockall annotations for testing
//!
//! The orchestrator reaches its I/O collaborators only through these traits,
//! so runs can be driven in tests without touching the file system.

use crate::core::{RosterEntry, Row};
use crate::error::OrchestratorResult;

/// Source of the roster, read once at startup
#[mockall::automock]
#[async_trait::async_trait]
pub trait RosterSource: Send + Sync {
    /// Read `(last name, first name)` entries in file order
    async fn load_roster(&self) -> OrchestratorResult<Vec<RosterEntry>>;
}

/// Destination for round and summary exports
#[mockall::automock]
#[async_trait::async_trait]
pub trait ResultSink: Send + Sync {
    /// Write the rows of one completed round
    ///
    /// # Parameters
    /// - `round`: 1-based round number
    /// - `rows`: table rows, separator, kitchen row, waiter row
    async fn write_round(&self, round: u32, rows: &[Row]) -> OrchestratorResult<()>;

    /// Write the cross-round summary
    async fn write_summary(&self, rows: &[Row]) -> OrchestratorResult<()>;
}

