//! Shared error types for the dinner seating system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid assignment label: {label}")]
    InvalidAssignment { label: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
