use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::Result;
use crate::filter::ProjectFilter;
use crate::types::{Instance, Snapshot, Volume};

/// Lazy sequence of remote resources. Elements carry enumeration errors so
/// a failing provider page surfaces at the point of consumption.
pub type ResourceStream<'a, T> = BoxStream<'a, Result<T>>;

/// One authenticated compute-provider session.
///
/// Enumerations are finite, restartable streams that fetch provider pages
/// on demand. The wait methods are opaque blocking calls: they return once
/// the provider reports the target state, or fail when the SDK gives up.
#[async_trait]
pub trait CloudProvider: Send + Sync {
    /// Instances in scope, in provider enumeration order.
    fn instances(&self, filter: &ProjectFilter) -> ResourceStream<'_, Instance>;

    /// Volumes attached to the given instance.
    fn volumes(&self, instance_id: &str) -> ResourceStream<'_, Volume>;

    /// Snapshots of the given volume, most recent first.
    fn snapshots(&self, volume_id: &str) -> ResourceStream<'_, Snapshot>;

    async fn start_instance(&self, instance_id: &str) -> Result<()>;

    async fn stop_instance(&self, instance_id: &str) -> Result<()>;

    async fn wait_until_stopped(&self, instance_id: &str) -> Result<()>;

    async fn wait_until_running(&self, instance_id: &str) -> Result<()>;

    /// Request a new snapshot of the volume; returns the new snapshot's id.
    async fn create_snapshot(&self, volume_id: &str, description: &str) -> Result<String>;
}
