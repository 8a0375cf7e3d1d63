//! Webserver state management

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    // Server configuration
    pub bind_address: SocketAddr,

    // Server statistics
    pub requests_served: Arc<AtomicU64>,
    pub server_start_time: Instant,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            requests_served: Arc::new(AtomicU64::new(0)),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count a served request, returning the new total
    pub fn record_request(&self) -> u64 {
        self.requests_served.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get_requests_served(&self) -> u64 {
        self.requests_served.load(Ordering::Relaxed)
    }
}
