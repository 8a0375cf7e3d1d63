//! Core seating logic
//!
//! Pure, synchronous business logic with no I/O dependencies. Randomness
//! enters only through the RNG handed to the orchestrator.

pub mod acquaintance;
pub mod assigner;
pub mod export;
pub mod person;
pub mod rotator;
pub mod state;
pub mod table;

pub use assigner::{SeatAssigner, SeatingStats};
pub use export::{round_rows, summary_rows, Row};
pub use person::{Person, Roster, RosterEntry};
pub use state::{RoundPhase, RoundState, StaffEntry};
pub use table::Table;
