//! Test fixtures and data for orchestrator tests

use orchestrator::{Roster, RosterEntry};
use shared::PersonId;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const SEED: u64 = 20_240_601;

    /// `n` distinct entries, "First00 Last00" onwards
    pub fn entries(n: usize) -> Vec<RosterEntry> {
        (0..n)
            .map(|i| RosterEntry::new(format!("Last{i:02}"), format!("First{i:02}")))
            .collect()
    }

    pub fn roster(n: usize) -> Roster {
        Roster::from_entries(&Self::entries(n))
    }

    /// Three people where the first two have already met
    pub fn acquainted_trio() -> Roster {
        let mut roster = Self::roster(3);
        roster.introduce(PersonId(1), PersonId(2)).unwrap();
        roster
    }

    /// Ten people who have never served, except `served` with one prior turn
    pub fn ten_with_one_served(served: PersonId) -> Roster {
        let mut roster = Self::roster(10);
        roster.get_mut(served).unwrap().times_served = 1;
        roster
    }

    /// Roster CSV text with a blank line and padded fields
    pub fn roster_csv() -> &'static str {
        "Lovelace, Ada\nTuring,Alan\n\n  Hopper , Grace\nKnuth,Donald,extra\nDijkstra,Edsger\nLiskov,Barbara\n"
    }
}
