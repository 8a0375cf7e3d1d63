//! Service implementations
//!
//! This module contains real implementations of all service traits.
//! These are the production implementations that handle actual I/O operations.

pub mod file_system;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use file_system::RealFileSystem;
