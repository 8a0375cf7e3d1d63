//! Dinner tables for a single round

use std::collections::BTreeSet;

use shared::{PersonId, TableRecord};

use super::person::Roster;
use crate::error::OrchestratorResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    id: u32,
    /// Occupants in seating order
    pub occupants: Vec<PersonId>,
    /// Everyone the occupants have met, plus the occupants themselves
    pub disallow: BTreeSet<PersonId>,
}

impl Table {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            occupants: Vec::new(),
            disallow: BTreeSet::new(),
        }
    }

    /// Fresh, empty tables numbered 1..=count
    pub fn numbered(count: usize) -> Vec<Table> {
        (1..=count as u32).map(Table::new).collect()
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn to_record(&self, roster: &Roster) -> OrchestratorResult<TableRecord> {
        let occupants = self
            .occupants
            .iter()
            .map(|id| roster.get(*id).map(|person| person.to_record()))
            .collect::<OrchestratorResult<Vec<_>>>()?;

        Ok(TableRecord {
            id: self.id,
            occupants,
            disallow: self.disallow.iter().copied().collect(),
        })
    }
}
