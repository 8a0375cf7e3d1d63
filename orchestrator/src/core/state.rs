//! Round-scoped state
//!
//! A [`RoundState`] is rebuilt at the start of every round and owned by the
//! orchestrator; components receive it by reference.

use std::collections::VecDeque;
use std::fmt;

use shared::{PersonId, Role, TableRecord};

use super::person::Roster;
use super::table::Table;
use crate::error::OrchestratorResult;

/// Phases of a single round, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Reset,
    Shuffle,
    Assign,
    Staff(Role),
    Export,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundPhase::Reset => write!(f, "reset"),
            RoundPhase::Shuffle => write!(f, "shuffle"),
            RoundPhase::Assign => write!(f, "assign"),
            RoundPhase::Staff(role) => write!(f, "staff({role})"),
            RoundPhase::Export => write!(f, "export"),
        }
    }
}

/// Someone drawn for staff duty this round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffEntry {
    pub person: PersonId,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct RoundState {
    round: u32,
    pub phase: RoundPhase,
    pub tables: Vec<Table>,
    /// Staff in draw order
    pub staff: Vec<StaffEntry>,
    /// People still to be seated; front is the next candidate
    pub pending: VecDeque<PersonId>,
    /// People held back for staff duty
    pub remainder: VecDeque<PersonId>,
    /// Deferrals performed while seating this round
    pub deferrals: usize,
}

impl RoundState {
    /// Fresh state with `table_count` empty tables
    pub fn new(round: u32, table_count: usize) -> Self {
        Self {
            round,
            phase: RoundPhase::Reset,
            tables: Table::numbered(table_count),
            staff: Vec::new(),
            pending: VecDeque::new(),
            remainder: VecDeque::new(),
            deferrals: 0,
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn enter(&mut self, phase: RoundPhase) {
        self.phase = phase;
    }

    /// Tables ordered by id, whatever order seating left them in
    pub fn tables_by_id(&self) -> Vec<&Table> {
        let mut tables: Vec<&Table> = self.tables.iter().collect();
        tables.sort_by_key(|table| table.id());
        tables
    }

    pub fn seated_count(&self) -> usize {
        self.tables.iter().map(Table::len).sum()
    }

    /// Staff of one role, in draw order
    pub fn staff_for(&self, role: Role) -> impl Iterator<Item = PersonId> + '_ {
        self.staff
            .iter()
            .filter(move |entry| entry.role == role)
            .map(|entry| entry.person)
    }

    pub fn table_records(&self, roster: &Roster) -> OrchestratorResult<Vec<TableRecord>> {
        self.tables_by_id()
            .into_iter()
            .map(|table| table.to_record(roster))
            .collect()
    }
}
