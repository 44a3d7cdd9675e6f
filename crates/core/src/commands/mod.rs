pub mod instances;
pub mod snapshots;
pub mod volumes;

use std::io::Write;

use futures::StreamExt;

use crate::cloud_provider::CloudProvider;
use crate::error::Result;
use crate::filter::ProjectFilter;

/// Marker printed once a mutating batch has run to completion.
pub(crate) const COMPLETION_MARKER: &str = "Job's done!";

/// Mutating commands refuse to touch the whole fleet unless forced.
/// Prints the refusal diagnostic and returns false when the precondition
/// fails, so callers can return before any provider call is made.
pub(crate) fn mutation_permitted(
    filter: &ProjectFilter,
    force: bool,
    out: &mut impl Write,
) -> Result<bool> {
    if filter.is_scoped() || force {
        return Ok(true);
    }
    writeln!(out, "No project defined, breaking")?;
    Ok(false)
}

/// True when the most recent snapshot of the volume is still in progress.
/// A volume with no snapshots has nothing pending.
pub async fn has_pending_snapshot(
    provider: &dyn CloudProvider,
    volume_id: &str,
) -> Result<bool> {
    let mut snapshots = provider.snapshots(volume_id);
    let newest = snapshots.next().await.transpose()?;
    Ok(newest.is_some_and(|snapshot| snapshot.state.is_pending()))
}
