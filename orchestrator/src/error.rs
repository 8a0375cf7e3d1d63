//! Orchestrator-specific error types

use shared::{PersonId, Role};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Roster file unreadable: {path}: {source}")]
    RosterUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster record on line {line}: {reason}")]
    MalformedRoster { line: u64, reason: String },

    #[error("Export to {path} failed: {message}")]
    ExportFailed { path: PathBuf, message: String },

    #[error("Infeasible seating in round {round}: person {person} fits no table ({unseated} still unseated)")]
    InfeasibleSeating {
        round: u32,
        person: PersonId,
        unseated: usize,
    },

    #[error("Not enough people left for {role} duty: needed {needed}, available {available}")]
    StaffShortage {
        role: Role,
        needed: usize,
        available: usize,
    },

    #[error("Unknown person: {id}")]
    UnknownPerson { id: PersonId },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("WebServer failed: {message}")]
    WebServerError { message: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OrchestratorError {
    pub fn config(field: impl Into<String>) -> Self {
        OrchestratorError::ConfigurationError { field: field.into() }
    }

    /// Whether the run can continue by skipping the current round
    pub fn is_recoverable(&self) -> bool {
        matches!(self, OrchestratorError::InfeasibleSeating { .. })
    }
}

impl From<webserver::WebServerError> for OrchestratorError {
    fn from(err: webserver::WebServerError) -> Self {
        OrchestratorError::WebServerError { message: err.to_string() }
    }
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
