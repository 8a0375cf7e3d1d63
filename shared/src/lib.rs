//! Shared types for the dinner seating system
//!
//! Contains the identifiers, assignment labels and snapshot records that the
//! orchestrator publishes and the webserver serves, plus the logging setup
//! used by every component.

pub mod errors;
pub mod logging;
pub mod snapshot;
pub mod types;

pub use errors::*;
pub use snapshot::{PersonRecord, Snapshot, SnapshotHandle, TableRecord};
pub use types::*;
