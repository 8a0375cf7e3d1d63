//! Greedy table assignment with deferral
//!
//! Candidates are taken from the front of the pending pool and seated at the
//! least-occupied eligible table. A candidate with no eligible table moves to
//! the back of the pool and the next one is tried.
//!
//! Two bounds make every round terminate:
//! - once everyone still pending has been deferred since the last seating,
//!   table state can no longer change and the round is infeasible;
//! - total deferrals in a round may not exceed `max_deferrals`.

use shared::{process_debug, Assignment, ProcessId};

use super::acquaintance::{eligible, record_seating};
use super::person::Roster;
use super::state::RoundState;
use crate::error::{OrchestratorError, OrchestratorResult};

/// Outcome of seating one round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatingStats {
    pub seated: usize,
    pub deferrals: usize,
    /// Met-set entries added while seating
    pub introductions: usize,
}

#[derive(Debug, Clone)]
pub struct SeatAssigner {
    max_deferrals: usize,
}

impl SeatAssigner {
    pub fn new(max_deferrals: usize) -> Self {
        Self { max_deferrals }
    }

    /// Seat everyone in `state.pending`
    ///
    /// On error the pending pool and tables are left partially filled; the
    /// caller discards the round.
    pub fn assign(&self, state: &mut RoundState, roster: &mut Roster) -> OrchestratorResult<SeatingStats> {
        let mut stats = SeatingStats::default();
        let mut consecutive_deferrals = 0usize;

        while let Some(candidate) = state.pending.pop_front() {
            // Least-occupied first; id keeps the order deterministic
            state.tables.sort_by_key(|table| (table.len(), table.id()));

            let person = roster.get(candidate)?;
            let slot = state.tables.iter().position(|table| eligible(table, person));

            match slot {
                Some(index) => {
                    let table = &mut state.tables[index];
                    let table_id = table.id();
                    stats.introductions += record_seating(table, roster, candidate)?;
                    roster.get_mut(candidate)?.current_assignment = Some(Assignment::Table(table_id));
                    stats.seated += 1;
                    consecutive_deferrals = 0;
                }
                None => {
                    consecutive_deferrals += 1;
                    stats.deferrals += 1;
                    state.deferrals += 1;

                    // pending no longer holds the candidate, hence the +1
                    let unseated = state.pending.len() + 1;
                    if consecutive_deferrals >= unseated || stats.deferrals > self.max_deferrals {
                        return Err(OrchestratorError::InfeasibleSeating {
                            round: state.round(),
                            person: candidate,
                            unseated,
                        });
                    }

                    process_debug!(
                        ProcessId::current(),
                        "Deferring person {} in round {} ({} in a row)",
                        candidate,
                        state.round(),
                        consecutive_deferrals
                    );
                    state.pending.push_back(candidate);
                }
            }
        }

        Ok(stats)
    }
}
