//! Main orchestrator implementation
//!
//! Runs the configured number of rounds against the long-lived roster,
//! exports each round through the injected sink and publishes a snapshot for
//! HTTP readers after every completed round.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use shared::{logging, process_debug, process_info, PersonId, ProcessId, Role, Snapshot, SnapshotHandle};

use crate::{
    config::SeatingConfig,
    core::{rotator, round_rows, summary_rows, RoundPhase, RoundState, Roster, Row, SeatAssigner},
    error::{OrchestratorError, OrchestratorResult},
    traits::{ResultSink, RosterSource},
};

/// Counters for one completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub seated: usize,
    pub kitchen: usize,
    pub waiters: usize,
    pub deferrals: usize,
    pub introductions: usize,
}

/// A round abandoned because nobody could be seated legally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRound {
    pub round: u32,
    pub reason: String,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: Vec<RoundReport>,
    pub skipped: Vec<SkippedRound>,
}

impl RunSummary {
    pub fn rounds_completed(&self) -> usize {
        self.completed.len()
    }
}

/// Main orchestrator that drives the seating rounds
pub struct Orchestrator<R, S>
where
    R: RosterSource + Send + Sync + 'static,
    S: ResultSink + Send + Sync + 'static,
{
    config: SeatingConfig,

    /// People and their cross-round history
    roster: Roster,

    /// Injected services
    roster_source: R,
    result_sink: S,

    rng: StdRng,
    assigner: SeatAssigner,

    /// Published state for read-only consumers
    snapshot: SnapshotHandle,
}

impl<R, S> Orchestrator<R, S>
where
    R: RosterSource + Send + Sync + 'static,
    S: ResultSink + Send + Sync + 'static,
{
    /// Create new orchestrator with injected dependencies
    pub fn new(config: SeatingConfig, roster_source: R, result_sink: S, snapshot: SnapshotHandle) -> OrchestratorResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let assigner = SeatAssigner::new(config.max_deferrals);

        Ok(Self {
            config,
            roster: Roster::new(),
            roster_source,
            result_sink,
            rng,
            assigner,
            snapshot,
        })
    }

    /// Replace the roster, e.g. to carry acquaintances from an earlier event
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn snapshot_handle(&self) -> SnapshotHandle {
        self.snapshot.clone()
    }

    /// Read the roster from the source and publish the pre-run snapshot
    pub async fn load_roster(&mut self) -> OrchestratorResult<usize> {
        let entries = self.roster_source.load_roster().await?;
        self.roster = Roster::from_entries(&entries);
        self.config.validate_for_roster(self.roster.len())?;

        self.snapshot.publish(self.build_snapshot(0, None)?).await;
        logging::log_progress(
            ProcessId::current(),
            "Roster loaded",
            &format!("{} people", self.roster.len()),
        );
        Ok(self.roster.len())
    }

    /// Run every configured round, then export the summary
    ///
    /// Infeasible rounds are skipped: met-sets and staff turns stay as they
    /// were and everyone's history gets a `Skipped` entry. Any other error
    /// aborts the run.
    pub async fn run(&mut self) -> OrchestratorResult<RunSummary> {
        self.config.validate_for_roster(self.roster.len())?;
        logging::log_startup(
            ProcessId::current(),
            &format!(
                "{} rounds: {} people, {} tables, {} kitchen, {} waiters",
                self.config.rounds,
                self.roster.len(),
                self.config.tables,
                self.config.kitchen_staff,
                self.config.waiter_staff
            ),
        );

        let mut summary = RunSummary::default();
        for round in 1..=self.config.rounds {
            match self.play_round(round) {
                Ok((state, report)) => {
                    let rows = round_rows(&state, &self.roster)?;
                    self.result_sink.write_round(round, &rows).await?;
                    self.snapshot.publish(self.build_snapshot(round, Some(&state))?).await;

                    process_info!(
                        ProcessId::current(),
                        "🍽️ Round {} complete: {} seated, {} kitchen, {} waiters, {} deferrals",
                        round,
                        report.seated,
                        report.kitchen,
                        report.waiters,
                        report.deferrals
                    );
                    summary.completed.push(report);
                }
                Err(err) if err.is_recoverable() => {
                    logging::log_skipped(ProcessId::current(), &format!("Round {round}"), &err);
                    self.roster.mark_round_skipped();
                    summary.skipped.push(SkippedRound {
                        round,
                        reason: err.to_string(),
                    });
                }
                Err(err) => {
                    logging::log_error(ProcessId::current(), &format!("Round {round}"), &err);
                    return Err(err);
                }
            }
        }

        self.result_sink.write_summary(&self.aggregate()).await?;
        logging::log_success(
            ProcessId::current(),
            &format!(
                "Run finished: {} rounds completed, {} skipped",
                summary.completed.len(),
                summary.skipped.len()
            ),
        );
        Ok(summary)
    }

    /// Play one round against a working copy of the roster
    ///
    /// The roster is only replaced when the round completes, so a failed
    /// round leaves no trace in anyone's history or met-set.
    pub fn play_round(&mut self, round: u32) -> OrchestratorResult<(RoundState, RoundReport)> {
        let mut roster = self.roster.clone();
        let mut state = RoundState::new(round, self.config.tables);

        self.enter(&mut state, RoundPhase::Reset);
        for person in roster.iter_mut() {
            person.current_assignment = None;
        }

        self.enter(&mut state, RoundPhase::Shuffle);
        let order = self.shuffled_order(&roster)?;
        let seated_count = order.len().checked_sub(self.config.staff_needed()).ok_or_else(|| {
            OrchestratorError::config(format!(
                "roster of {} cannot cover {} staff slots",
                order.len(),
                self.config.staff_needed()
            ))
        })?;
        state.pending = order[..seated_count].iter().copied().collect();
        state.remainder = order[seated_count..].iter().copied().collect();

        self.enter(&mut state, RoundPhase::Assign);
        let stats = self.assigner.assign(&mut state, &mut roster)?;

        self.enter(&mut state, RoundPhase::Staff(Role::Kitchen));
        rotator::order_remainder(&mut state, &roster)?;
        let kitchen = rotator::draw(&mut state, &mut roster, self.config.kitchen_staff, Role::Kitchen)?;

        self.enter(&mut state, RoundPhase::Staff(Role::Waiter));
        let waiters = rotator::draw(&mut state, &mut roster, self.config.waiter_staff, Role::Waiter)?;

        self.enter(&mut state, RoundPhase::Export);
        for person in roster.iter_mut() {
            person.archive_assignment();
        }
        self.roster = roster;

        let report = RoundReport {
            round,
            seated: stats.seated,
            kitchen: kitchen.len(),
            waiters: waiters.len(),
            deferrals: stats.deferrals,
            introductions: stats.introductions,
        };
        Ok((state, report))
    }

    /// Cross-round summary rows; does not modify any state
    pub fn aggregate(&self) -> Vec<Row> {
        summary_rows(&self.roster, self.config.rounds)
    }

    /// Uniform shuffle, then most-served first so the least-served are held back for staff
    fn shuffled_order(&mut self, roster: &Roster) -> OrchestratorResult<Vec<PersonId>> {
        let mut ids = roster.ids();
        ids.shuffle(&mut self.rng);

        let mut keyed = ids
            .into_iter()
            .map(|id| roster.get(id).map(|person| (person.times_served, id)))
            .collect::<OrchestratorResult<Vec<_>>>()?;
        // stable: ties keep shuffle order
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }

    fn enter(&self, state: &mut RoundState, phase: RoundPhase) {
        process_debug!(ProcessId::current(), "Round {} → {}", state.round(), phase);
        state.enter(phase);
    }

    fn build_snapshot(&self, round: u32, state: Option<&RoundState>) -> OrchestratorResult<Snapshot> {
        let tables = match state {
            Some(state) => state.table_records(&self.roster)?,
            None => Vec::new(),
        };
        Ok(Snapshot {
            round,
            people: self.roster.iter().map(|person| person.to_record()).collect(),
            tables,
        })
    }
}
