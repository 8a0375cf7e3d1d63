//! Test fixtures for webserver integration tests

use shared::{Assignment, PersonId, PersonRecord, Role, Snapshot, TableRecord};

pub fn create_test_person(id: u32, name: &str, current: Assignment) -> PersonRecord {
    PersonRecord {
        name: name.to_string(),
        id: PersonId(id),
        times_served: u32::from(current.is_staff()),
        have_met: Vec::new(),
        previous_assignments: vec![current],
        current_assignment: current.to_string(),
    }
}

/// Round 1 of a four person roster: one table of two, one cook, one waiter
pub fn create_test_snapshot() -> Snapshot {
    let mut ada = create_test_person(1, "Ada Lovelace", Assignment::Table(1));
    let mut alan = create_test_person(2, "Alan Turing", Assignment::Table(1));
    ada.have_met = vec![PersonId(2)];
    alan.have_met = vec![PersonId(1)];

    let grace = create_test_person(3, "Grace Hopper", Assignment::Staff(Role::Kitchen));
    let edsger = create_test_person(4, "Edsger Dijkstra", Assignment::Staff(Role::Waiter));

    Snapshot {
        round: 1,
        tables: vec![TableRecord {
            id: 1,
            occupants: vec![ada.clone(), alan.clone()],
            disallow: vec![PersonId(1), PersonId(2)],
        }],
        people: vec![ada, alan, grace, edsger],
    }
}
