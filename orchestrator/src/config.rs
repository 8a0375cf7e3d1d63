//! Seating run configuration

use crate::error::{OrchestratorError, OrchestratorResult};

/// Default number of tables in the dining hall
pub const DEFAULT_TABLES: usize = 31;
/// Default number of kitchen slots per round
pub const DEFAULT_KITCHEN_STAFF: usize = 7;
/// Default number of rounds in a run
pub const DEFAULT_ROUNDS: u32 = 3;
/// Default per-round ceiling on deferrals before a round is declared infeasible
pub const DEFAULT_MAX_DEFERRALS: usize = 10_000;

/// Fixed parameters of one seating run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingConfig {
    pub tables: usize,
    pub kitchen_staff: usize,
    pub waiter_staff: usize,
    pub rounds: u32,
    /// Seed for the per-round shuffle; entropy when absent
    pub seed: Option<u64>,
    pub max_deferrals: usize,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            tables: DEFAULT_TABLES,
            kitchen_staff: DEFAULT_KITCHEN_STAFF,
            // one waiter per table
            waiter_staff: DEFAULT_TABLES,
            rounds: DEFAULT_ROUNDS,
            seed: None,
            max_deferrals: DEFAULT_MAX_DEFERRALS,
        }
    }
}

impl SeatingConfig {
    pub fn new(tables: usize, kitchen_staff: usize, waiter_staff: usize, rounds: u32) -> Self {
        Self {
            tables,
            kitchen_staff,
            waiter_staff,
            rounds,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_deferrals(mut self, max_deferrals: usize) -> Self {
        self.max_deferrals = max_deferrals;
        self
    }

    /// Number of people drawn for staff duty each round
    pub fn staff_needed(&self) -> usize {
        self.kitchen_staff + self.waiter_staff
    }

    /// Validate settings that do not depend on the roster
    pub fn validate(&self) -> OrchestratorResult<()> {
        if self.rounds == 0 {
            return Err(OrchestratorError::config("rounds must be at least 1"));
        }
        Ok(())
    }

    /// Validate settings against a loaded roster of `roster_size` people
    pub fn validate_for_roster(&self, roster_size: usize) -> OrchestratorResult<()> {
        self.validate()?;
        if roster_size < self.staff_needed() {
            return Err(OrchestratorError::config(format!(
                "roster of {roster_size} cannot cover {} staff slots",
                self.staff_needed()
            )));
        }
        if self.tables == 0 && roster_size > self.staff_needed() {
            return Err(OrchestratorError::config(
                "tables must be at least 1 when people remain to be seated",
            ));
        }
        Ok(())
    }
}
