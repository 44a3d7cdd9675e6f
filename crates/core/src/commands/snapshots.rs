//! Snapshot listing.

use std::io::Write;

use futures::StreamExt;

use crate::cloud_provider::CloudProvider;
use crate::error::Result;
use crate::filter::ProjectFilter;
use crate::format;

/// Prints every snapshot of every volume in scope, newest first. Without
/// `list_all` the walk of a volume stops right after the most recent
/// completed snapshot has been printed, so earlier history stays hidden.
pub async fn list(
    provider: &dyn CloudProvider,
    filter: &ProjectFilter,
    list_all: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut instances = provider.instances(filter);
    while let Some(instance) = instances.next().await.transpose()? {
        let mut volumes = provider.volumes(&instance.id);
        while let Some(volume) = volumes.next().await.transpose()? {
            let mut snapshots = provider.snapshots(&volume.id);
            while let Some(snapshot) = snapshots.next().await.transpose()? {
                writeln!(out, "{}", format::snapshot_line(&instance, &volume, &snapshot))?;

                if snapshot.state.is_completed() && !list_all {
                    break;
                }
            }
        }
    }
    Ok(())
}
