//! Webserver library for the dinner seating system
//!
//! Serves a read-only JSON view of the most recently published seating
//! snapshot: people, tables and a health probe.

pub mod error;
pub mod state;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use traits::SnapshotSource;
pub use webserver_impl::WebServer;
