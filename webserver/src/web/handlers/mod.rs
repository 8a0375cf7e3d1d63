//! Request handlers

pub mod api;

pub use api::{get_people, get_tables, health_check};
