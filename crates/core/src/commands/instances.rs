//! Instance lifecycle commands: list, start, stop, reboot, snapshot.

use std::io::Write;

use futures::StreamExt;

use crate::cloud_provider::CloudProvider;
use crate::error::Result;
use crate::filter::ProjectFilter;
use crate::format;

use super::{COMPLETION_MARKER, has_pending_snapshot, mutation_permitted};

/// Label attached to every snapshot this tool creates.
pub const SNAPSHOT_DESCRIPTION: &str = "Created by fleetctl";

pub async fn list(
    provider: &dyn CloudProvider,
    filter: &ProjectFilter,
    out: &mut impl Write,
) -> Result<()> {
    let mut instances = provider.instances(filter);
    while let Some(instance) = instances.next().await.transpose()? {
        writeln!(out, "{}", format::instance_line(&instance))?;
    }
    Ok(())
}

/// Requests a start for every instance in scope. A rejection for one
/// instance is reported and skipped; the rest of the batch still runs.
pub async fn start(
    provider: &dyn CloudProvider,
    filter: &ProjectFilter,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !mutation_permitted(filter, force, out)? {
        return Ok(());
    }

    let mut instances = provider.instances(filter);
    while let Some(instance) = instances.next().await.transpose()? {
        writeln!(out, "Starting {}...", instance.id)?;
        if let Err(err) = provider.start_instance(&instance.id).await {
            if err.is_client_error() {
                writeln!(out, " Could not start {}. {}", instance.id, err)?;
                continue;
            }
            return Err(err);
        }
    }
    writeln!(out, "{COMPLETION_MARKER}")?;
    Ok(())
}

pub async fn stop(
    provider: &dyn CloudProvider,
    filter: &ProjectFilter,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !mutation_permitted(filter, force, out)? {
        return Ok(());
    }

    let mut instances = provider.instances(filter);
    while let Some(instance) = instances.next().await.transpose()? {
        writeln!(out, "Stopping {}...", instance.id)?;
        if let Err(err) = provider.stop_instance(&instance.id).await {
            if err.is_client_error() {
                writeln!(out, " Could not stop {}. {}", instance.id, err)?;
                continue;
            }
            return Err(err);
        }
    }
    writeln!(out, "{COMPLETION_MARKER}")?;
    Ok(())
}

/// Full stop/start cycle per instance, blocking on each transition.
/// Unlike start/stop there is no per-instance isolation: the first
/// failure aborts the whole batch.
pub async fn reboot(
    provider: &dyn CloudProvider,
    filter: &ProjectFilter,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !mutation_permitted(filter, force, out)? {
        return Ok(());
    }

    let mut instances = provider.instances(filter);
    while let Some(instance) = instances.next().await.transpose()? {
        writeln!(out, "Stopping {}...", instance.id)?;
        provider.stop_instance(&instance.id).await?;
        provider.wait_until_stopped(&instance.id).await?;
        provider.start_instance(&instance.id).await?;
        provider.wait_until_running(&instance.id).await?;
        writeln!(out, "Started {}...", instance.id)?;
    }
    writeln!(out, "{COMPLETION_MARKER}")?;
    Ok(())
}

/// Stops each instance, snapshots every attached volume while it is down,
/// then brings it back up. The pending check only drives the notice; a
/// new snapshot is requested either way.
pub async fn snapshot(
    provider: &dyn CloudProvider,
    filter: &ProjectFilter,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !mutation_permitted(filter, force, out)? {
        return Ok(());
    }

    let mut instances = provider.instances(filter);
    while let Some(instance) = instances.next().await.transpose()? {
        writeln!(out, "Stopping {}...", instance.id)?;
        provider.stop_instance(&instance.id).await?;
        provider.wait_until_stopped(&instance.id).await?;

        let mut volumes = provider.volumes(&instance.id);
        while let Some(volume) = volumes.next().await.transpose()? {
            if has_pending_snapshot(provider, &volume.id).await? {
                writeln!(
                    out,
                    "   Skipping {}, snapshot already in progress",
                    volume.id
                )?;
            }
            writeln!(out, "   Creating snapshot of {}", volume.id)?;
            provider
                .create_snapshot(&volume.id, SNAPSHOT_DESCRIPTION)
                .await?;
        }

        writeln!(out, "Starting {}...", instance.id)?;
        provider.start_instance(&instance.id).await?;
        provider.wait_until_running(&instance.id).await?;
    }
    writeln!(out, "{COMPLETION_MARKER}")?;
    Ok(())
}
