//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::{SharedError, SharedResult};

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Identity of the component emitting log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Seating run, including the snapshot server it hosts afterwards
    Orchestrator,
}

impl ProcessId {
    /// Initialize the global process ID for orchestrator
    pub fn init_orchestrator() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Orchestrator)
    }

    /// Get the global process ID, falling back to the orchestrator when
    /// nothing has been initialized (library use and tests)
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&ProcessId::Orchestrator)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Orchestrator => write!(f, "orchestrator"),
        }
    }
}

/// Stable identifier of a person, assigned 1..=N in roster order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u32);

impl PersonId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Staff duty drawn after tables are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Kitchen,
    Waiter,
}

impl Role {
    /// Heading used for this role's row in a round export
    pub fn heading(self) -> &'static str {
        match self {
            Role::Kitchen => "Kitchen Staff",
            Role::Waiter => "Waiter Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Kitchen => write!(f, "Kitchen"),
            Role::Waiter => write!(f, "Waiter"),
        }
    }
}

/// Where a person spends one round
///
/// Serialized as its label text (`"Table 4"`, `"Kitchen"`, `"Waiter"`).
/// `Skipped` marks a round that could not be seated and was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Assignment {
    Table(u32),
    Staff(Role),
    Skipped,
}

impl Assignment {
    pub fn is_staff(self) -> bool {
        matches!(self, Assignment::Staff(_))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Table(id) => write!(f, "Table {id}"),
            Assignment::Staff(role) => write!(f, "{role}"),
            Assignment::Skipped => write!(f, "Skipped"),
        }
    }
}

impl FromStr for Assignment {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        let invalid = || SharedError::InvalidAssignment { label: s.to_string() };
        match s.trim() {
            "Kitchen" => Ok(Assignment::Staff(Role::Kitchen)),
            "Waiter" => Ok(Assignment::Staff(Role::Waiter)),
            "Skipped" => Ok(Assignment::Skipped),
            other => other
                .strip_prefix("Table ")
                .and_then(|id| id.trim().parse::<u32>().ok())
                .map(Assignment::Table)
                .ok_or_else(invalid),
        }
    }
}

impl From<Assignment> for String {
    fn from(assignment: Assignment) -> Self {
        assignment.to_string()
    }
}

impl TryFrom<String> for Assignment {
    type Error = SharedError;

    fn try_from(value: String) -> SharedResult<Self> {
        value.parse()
    }
}
