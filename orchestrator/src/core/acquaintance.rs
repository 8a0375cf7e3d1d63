//! Acquaintance tracking
//!
//! Keeps each table's disallow set and each person's met-set in step. Both
//! only grow: acquaintances are never forgotten, across rounds included.

use shared::PersonId;

use super::person::{Person, Roster};
use super::table::Table;
use crate::error::OrchestratorResult;

/// Whether `candidate` may join `table` without meeting anyone twice
pub fn eligible(table: &Table, candidate: &Person) -> bool {
    !table.disallow.contains(&candidate.id())
}

/// Seat `candidate` at `table` and propagate acquaintances
///
/// The candidate's met-set and id are merged into the table's disallow set,
/// then every occupant (the candidate included) learns the whole disallow set.
/// This must run before the next eligibility check at the same table.
///
/// Returns the number of met-set entries added across all occupants.
pub fn record_seating(table: &mut Table, roster: &mut Roster, candidate: PersonId) -> OrchestratorResult<usize> {
    let person = roster.get(candidate)?;
    table.disallow.extend(person.have_met.iter().copied());
    table.disallow.insert(candidate);
    table.occupants.push(candidate);

    let mut added = 0;
    for occupant in &table.occupants {
        let person = roster.get_mut(*occupant)?;
        for id in &table.disallow {
            if id != occupant && person.have_met.insert(*id) {
                added += 1;
            }
        }
    }
    Ok(added)
}
