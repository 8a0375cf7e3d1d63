//! Main webserver implementation
//!
//! Builds the axum router over an injected [`SnapshotSource`] and serves it
//! until the supplied shutdown future resolves.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shared::{logging, process_info, ProcessId};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::SnapshotSource;
use crate::web::handlers::{get_people, get_tables, health_check};

/// Main webserver struct with dependency injection
pub struct WebServer<S>
where
    S: SnapshotSource,
{
    state: Arc<WebServerState>,
    snapshots: Arc<S>,
}

impl<S> Clone for WebServer<S>
where
    S: SnapshotSource,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            snapshots: Arc::clone(&self.snapshots),
        }
    }
}

impl<S> WebServer<S>
where
    S: SnapshotSource + 'static,
{
    /// Create a new webserver reading from `snapshots`
    pub fn new(bind_address: SocketAddr, snapshots: S) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address)),
            snapshots: Arc::new(snapshots),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/people", get(get_people::<S>))
            .route("/tables", get(get_tables::<S>))
            .route("/health", get(health_check::<S>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run_until<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.state.bind_address;
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|source| WebServerError::BindFailed { address, source })?;

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", address);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| WebServerError::ServerError(e.to_string()))?;

        logging::log_shutdown(ProcessId::current(), "HTTP server stopped");
        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn snapshots(&self) -> &S {
        &self.snapshots
    }
}
