//! Read-only snapshots of seating state
//!
//! The orchestrator publishes one immutable [`Snapshot`] per completed round.
//! Readers clone the inner `Arc` and never hold a reference into round state.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::{Assignment, PersonId};

/// Keyed-field view of one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonRecord {
    pub name: String,
    pub id: PersonId,
    pub times_served: u32,
    pub have_met: Vec<PersonId>,
    pub previous_assignments: Vec<Assignment>,
    /// Label of the latest assignment, empty before the first round
    pub current_assignment: String,
}

/// Keyed-field view of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableRecord {
    pub id: u32,
    pub occupants: Vec<PersonRecord>,
    pub disallow: Vec<PersonId>,
}

/// Full state as of the most recently completed round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Completed round this snapshot reflects (0 before any round)
    pub round: u32,
    pub people: Vec<PersonRecord>,
    pub tables: Vec<TableRecord>,
}

/// Shared publication point between the orchestrator and HTTP readers
#[derive(Debug, Clone, Default)]
pub struct SnapshotHandle {
    inner: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published snapshot
    pub async fn publish(&self, snapshot: Snapshot) {
        let mut guard = self.inner.write().await;
        *guard = Arc::new(snapshot);
    }

    /// Current snapshot; later publications do not affect the returned value
    pub async fn current(&self) -> Arc<Snapshot> {
        self.inner.read().await.clone()
    }
}
