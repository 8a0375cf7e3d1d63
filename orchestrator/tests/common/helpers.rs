//! Test helpers and builder patterns for orchestrator tests

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use orchestrator::core::Row;
use orchestrator::traits::{MockResultSink, MockRosterSource};
use orchestrator::{Orchestrator, Roster, SeatingConfig};
use shared::SnapshotHandle;

use super::fixtures::TestFixtures;

/// Rows captured by the recording sink
#[derive(Debug, Default)]
pub struct Recorded {
    pub rounds: Vec<(u32, Vec<Row>)>,
    pub summaries: Vec<Vec<Row>>,
}

/// Builder for orchestrators backed by mocks
pub struct OrchestratorBuilder {
    config: SeatingConfig,
    roster: Roster,
    roster_source: MockRosterSource,
    result_sink: Option<MockResultSink>,
}

impl OrchestratorBuilder {
    pub fn new(config: SeatingConfig) -> Self {
        Self {
            config: config.with_seed(TestFixtures::SEED),
            roster: Roster::new(),
            roster_source: MockRosterSource::new(),
            result_sink: None,
        }
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Configure the roster source mock with a setup function
    pub fn with_roster_source<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockRosterSource),
    {
        setup(&mut self.roster_source);
        self
    }

    /// Use a hand-configured sink instead of the recording one
    pub fn with_result_sink<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockResultSink),
    {
        let mut sink = MockResultSink::new();
        setup(&mut sink);
        self.result_sink = Some(sink);
        self
    }

    /// Build with a sink that records every export
    pub fn build(self) -> (Orchestrator<MockRosterSource, MockResultSink>, Arc<Mutex<Recorded>>) {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let sink = match self.result_sink {
            Some(sink) => sink,
            None => TestHelpers::recording_sink(Arc::clone(&recorded)),
        };

        let orchestrator = Orchestrator::new(self.config, self.roster_source, sink, SnapshotHandle::new())
            .unwrap()
            .with_roster(self.roster);
        (orchestrator, recorded)
    }
}

/// Assertions and inspection helpers
pub struct TestHelpers;

impl TestHelpers {
    pub fn recording_sink(recorded: Arc<Mutex<Recorded>>) -> MockResultSink {
        let mut sink = MockResultSink::new();
        let rounds = Arc::clone(&recorded);
        sink.expect_write_round().returning(move |round, rows| {
            rounds.lock().unwrap().rounds.push((round, rows.to_vec()));
            Ok(())
        });
        sink.expect_write_summary().returning(move |rows| {
            recorded.lock().unwrap().summaries.push(rows.to_vec());
            Ok(())
        });
        sink
    }

    /// Occupant names per table row of one round export
    pub fn table_groups(rows: &[Row]) -> Vec<Vec<String>> {
        rows.iter()
            .filter(|row| row.first().is_some_and(|cell| cell.starts_with("Table ")))
            .map(|row| row[1..].to_vec())
            .collect()
    }

    /// Names on the staff row with the given heading
    pub fn staff_row(rows: &[Row], heading: &str) -> Vec<String> {
        rows.iter()
            .find(|row| row.first().is_some_and(|cell| cell == heading))
            .map(|row| row[1..].to_vec())
            .unwrap_or_default()
    }

    /// Unordered pairs of people who shared a table
    pub fn co_seated_pairs(rows: &[Row]) -> BTreeSet<(String, String)> {
        let mut pairs = BTreeSet::new();
        for group in Self::table_groups(rows) {
            for (i, a) in group.iter().enumerate() {
                for b in &group[i + 1..] {
                    let pair = if a < b { (a.clone(), b.clone()) } else { (b.clone(), a.clone()) };
                    pairs.insert(pair);
                }
            }
        }
        pairs
    }

    /// Everyone named in one round export, tables and staff together
    pub fn everyone_in_round(rows: &[Row]) -> Vec<String> {
        let mut names: Vec<String> = Self::table_groups(rows).into_iter().flatten().collect();
        names.extend(Self::staff_row(rows, "Kitchen Staff"));
        names.extend(Self::staff_row(rows, "Waiter Staff"));
        names
    }
}
