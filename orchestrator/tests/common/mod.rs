//! Common test utilities and infrastructure
//!
//! Shared fixtures, a builder for mock-backed orchestrators and helpers for
//! inspecting exported rows.

// Each test binary uses a different subset
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::{OrchestratorBuilder, Recorded, TestHelpers};
