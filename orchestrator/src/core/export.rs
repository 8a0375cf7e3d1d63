//! Tabular rows for round and summary exports

use shared::Role;

use super::person::Roster;
use super::state::RoundState;
use crate::error::OrchestratorResult;

/// A single exported row
pub type Row = Vec<String>;

/// Rows for one round: one per table by id, a separator, then the staff rows
pub fn round_rows(state: &RoundState, roster: &Roster) -> OrchestratorResult<Vec<Row>> {
    let mut rows = Vec::with_capacity(state.tables.len() + 3);

    for table in state.tables_by_id() {
        let mut row = vec![format!("Table {}", table.id())];
        for id in &table.occupants {
            row.push(roster.get(*id)?.name.clone());
        }
        rows.push(row);
    }

    rows.push(Vec::new());

    for role in [Role::Kitchen, Role::Waiter] {
        let mut row = vec![role.heading().to_string()];
        for id in state.staff_for(role) {
            row.push(roster.get(id)?.name.clone());
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Cross-round summary, one row per person sorted by name
///
/// Pure over the roster: calling it twice gives identical rows.
pub fn summary_rows(roster: &Roster, rounds: u32) -> Vec<Row> {
    let mut rows = Vec::with_capacity(roster.len() + 1);
    rows.push(vec![
        "Name".to_string(),
        "ID".to_string(),
        "No. Times as Staff".to_string(),
        format!("Seatings 1-{rounds}"),
    ]);

    for person in roster.sorted_by_name() {
        let history = person
            .previous_assignments
            .iter()
            .map(|assignment| assignment.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        rows.push(vec![
            person.name.clone(),
            person.id().to_string(),
            person.times_served.to_string(),
            history,
        ]);
    }

    rows
}
