//! People and the long-lived roster
//!
//! A [`Person`] lives for the whole run. Only the identifier is fixed; every
//! other field is updated in place as rounds complete.

use std::collections::{BTreeMap, BTreeSet};

use shared::{Assignment, PersonId, PersonRecord};

use crate::error::{OrchestratorError, OrchestratorResult};

/// One roster line as read from the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub last_name: String,
    pub first_name: String,
}

impl RosterEntry {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    pub name: String,
    /// Rounds spent on kitchen or waiter duty
    pub times_served: u32,
    /// Everyone this person has shared a table with; never shrinks
    pub have_met: BTreeSet<PersonId>,
    pub previous_assignments: Vec<Assignment>,
    pub current_assignment: Option<Assignment>,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            times_served: 0,
            have_met: BTreeSet::new(),
            previous_assignments: Vec::new(),
            current_assignment: None,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn has_met(&self, other: PersonId) -> bool {
        self.have_met.contains(&other)
    }

    /// Append the current label to the history
    pub fn archive_assignment(&mut self) {
        if let Some(assignment) = self.current_assignment {
            self.previous_assignments.push(assignment);
        }
    }

    pub fn to_record(&self) -> PersonRecord {
        PersonRecord {
            name: self.name.clone(),
            id: self.id,
            times_served: self.times_served,
            have_met: self.have_met.iter().copied().collect(),
            previous_assignments: self.previous_assignments.clone(),
            current_assignment: self
                .current_assignment
                .map(|assignment| assignment.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Every person in the run, keyed by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    people: BTreeMap<PersonId, Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from input lines, numbering people 1..=N in order
    pub fn from_entries(entries: &[RosterEntry]) -> Self {
        let people = entries
            .iter()
            .zip(1u32..)
            .map(|(entry, id)| (PersonId(id), Person::new(PersonId(id), entry.display_name())))
            .collect();
        Self { people }
    }

    /// Insert a person; an existing person with the same id is replaced
    pub fn insert(&mut self, person: Person) {
        self.people.insert(person.id(), person);
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, id: PersonId) -> OrchestratorResult<&Person> {
        self.people.get(&id).ok_or(OrchestratorError::UnknownPerson { id })
    }

    pub fn get_mut(&mut self, id: PersonId) -> OrchestratorResult<&mut Person> {
        self.people.get_mut(&id).ok_or(OrchestratorError::UnknownPerson { id })
    }

    /// Identifiers in ascending order
    pub fn ids(&self) -> Vec<PersonId> {
        self.people.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.people.values_mut()
    }

    /// Record that two people have shared a table
    pub fn introduce(&mut self, a: PersonId, b: PersonId) -> OrchestratorResult<()> {
        self.get_mut(a)?.have_met.insert(b);
        self.get_mut(b)?.have_met.insert(a);
        Ok(())
    }

    /// Mark a round in which nobody was placed
    ///
    /// Keeps every history one entry per round, so summary columns line up
    /// with round numbers. Met-sets and staff turns are unchanged.
    pub fn mark_round_skipped(&mut self) {
        for person in self.people.values_mut() {
            person.current_assignment = Some(Assignment::Skipped);
            person.archive_assignment();
        }
    }

    /// People sorted by name, identifier breaking ties
    pub fn sorted_by_name(&self) -> Vec<&Person> {
        let mut people: Vec<&Person> = self.people.values().collect();
        people.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        people
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    #[test]
    fn test_from_entries_numbers_in_file_order() {
        let roster = Roster::from_entries(&[
            RosterEntry::new("Hopper", "Grace"),
            RosterEntry::new("Lovelace", "Ada"),
        ]);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(PersonId(1)).unwrap().name, "Grace Hopper");
        assert_eq!(roster.get(PersonId(2)).unwrap().name, "Ada Lovelace");
        assert!(matches!(
            roster.get(PersonId(3)),
            Err(OrchestratorError::UnknownPerson { .. })
        ));
    }

    #[test]
    fn test_introduce_is_symmetric() {
        let mut roster = Roster::from_entries(&[RosterEntry::new("A", "a"), RosterEntry::new("B", "b")]);
        roster.introduce(PersonId(1), PersonId(2)).unwrap();

        assert!(roster.get(PersonId(1)).unwrap().has_met(PersonId(2)));
        assert!(roster.get(PersonId(2)).unwrap().has_met(PersonId(1)));
    }

    #[test]
    fn test_archive_skips_unassigned() {
        let mut person = Person::new(PersonId(1), "Ada Lovelace");
        person.archive_assignment();
        assert!(person.previous_assignments.is_empty());

        person.current_assignment = Some(Assignment::Staff(Role::Kitchen));
        person.archive_assignment();
        assert_eq!(person.previous_assignments, vec![Assignment::Staff(Role::Kitchen)]);
    }

    #[test]
    fn test_mark_round_skipped_keeps_history_aligned() {
        let mut roster = Roster::from_entries(&[RosterEntry::new("A", "a"), RosterEntry::new("B", "b")]);
        roster.introduce(PersonId(1), PersonId(2)).unwrap();
        roster.get_mut(PersonId(1)).unwrap().previous_assignments = vec![Assignment::Table(1)];
        roster.get_mut(PersonId(2)).unwrap().times_served = 1;

        roster.mark_round_skipped();

        let first = roster.get(PersonId(1)).unwrap();
        assert_eq!(first.previous_assignments, vec![Assignment::Table(1), Assignment::Skipped]);
        assert_eq!(first.current_assignment, Some(Assignment::Skipped));
        assert!(first.has_met(PersonId(2)));
        let second = roster.get(PersonId(2)).unwrap();
        assert_eq!(second.previous_assignments, vec![Assignment::Skipped]);
        assert_eq!(second.times_served, 1);
    }

    #[test]
    fn test_sorted_by_name_breaks_ties_by_id() {
        let mut roster = Roster::new();
        roster.insert(Person::new(PersonId(3), "Sam Lee"));
        roster.insert(Person::new(PersonId(1), "Sam Lee"));
        roster.insert(Person::new(PersonId(2), "Alex Kim"));

        let ids: Vec<PersonId> = roster.sorted_by_name().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![PersonId(2), PersonId(1), PersonId(3)]);
    }

    #[test]
    fn test_record_reports_empty_current_assignment() {
        let person = Person::new(PersonId(4), "Alan Turing");
        let record = person.to_record();
        assert_eq!(record.current_assignment, "");
        assert!(record.have_met.is_empty());
    }
}
