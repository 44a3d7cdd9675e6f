//! Comma-separated status lines, one per resource.

use crate::types::{Instance, PROJECT_TAG, Snapshot, Volume};

/// Placeholder printed when an instance carries no `Project` tag.
pub const NO_PROJECT: &str = "<no project>";

pub fn instance_line(instance: &Instance) -> String {
    format!(
        "{}, {}, {}, {}, {}, {}",
        instance.id,
        instance.instance_type,
        instance.availability_zone,
        instance.state,
        instance.public_dns_name,
        instance.tags.get_or(PROJECT_TAG, NO_PROJECT),
    )
}

pub fn volume_line(instance: &Instance, volume: &Volume) -> String {
    format!(
        "{}, {}, {}, {}GiB, {}",
        volume.id,
        instance.id,
        volume.state,
        volume.size_gib,
        encryption_label(volume.encrypted),
    )
}

pub fn snapshot_line(instance: &Instance, volume: &Volume, snapshot: &Snapshot) -> String {
    format!(
        "{}, {}, {}, {}, {}, {}",
        snapshot.id,
        volume.id,
        instance.id,
        snapshot.state,
        snapshot.progress,
        start_time(snapshot),
    )
}

fn encryption_label(encrypted: bool) -> &'static str {
    if encrypted { "Encrypted" } else { "Not Encrypted" }
}

fn start_time(snapshot: &Snapshot) -> String {
    snapshot
        .started_at
        .map(|at| at.format("%c").to_string())
        .unwrap_or_default()
}
