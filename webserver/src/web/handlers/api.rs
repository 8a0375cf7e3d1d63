//! REST API handlers
//!
//! Read-only JSON endpoints over the latest published snapshot. Handlers
//! never hold the snapshot lock; they clone the published `Arc`.

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use shared::{process_debug, PersonRecord, ProcessId, TableRecord};

use crate::traits::SnapshotSource;
use crate::webserver_impl::WebServer;

/// Every person with history and acquaintances - /people
pub async fn get_people<S>(State(webserver): State<WebServer<S>>) -> Json<Vec<PersonRecord>>
where
    S: SnapshotSource + 'static,
{
    webserver.state().record_request();
    let snapshot = webserver.snapshots().current().await;
    process_debug!(
        ProcessId::current(),
        "Serving {} people from round {}",
        snapshot.people.len(),
        snapshot.round
    );
    Json(snapshot.people.clone())
}

/// Every table of the latest completed round - /tables
pub async fn get_tables<S>(State(webserver): State<WebServer<S>>) -> Json<Vec<TableRecord>>
where
    S: SnapshotSource + 'static,
{
    webserver.state().record_request();
    let snapshot = webserver.snapshots().current().await;
    process_debug!(
        ProcessId::current(),
        "Serving {} tables from round {}",
        snapshot.tables.len(),
        snapshot.round
    );
    Json(snapshot.tables.clone())
}

/// Liveness plus the round being served - /health
pub async fn health_check<S>(State(webserver): State<WebServer<S>>) -> Json<Value>
where
    S: SnapshotSource + 'static,
{
    let snapshot = webserver.snapshots().current().await;
    let state = webserver.state();

    Json(json!({
        "status": "ok",
        "round": snapshot.round,
        "people": snapshot.people.len(),
        "uptime_seconds": state.get_uptime_seconds(),
        "requests_served": state.get_requests_served(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
