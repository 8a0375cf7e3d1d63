//! Trait definitions with mockall annotations for testing

use std::sync::Arc;

use shared::{Snapshot, SnapshotHandle};

/// Read access to the latest published snapshot
#[mockall::automock]
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Snapshot of the most recently completed round
    async fn current(&self) -> Arc<Snapshot>;
}

#[async_trait::async_trait]
impl SnapshotSource for SnapshotHandle {
    async fn current(&self) -> Arc<Snapshot> {
        SnapshotHandle::current(self).await
    }
}
