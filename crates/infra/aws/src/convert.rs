//! Conversions between SDK wire types and the core resource model.

use aws_sdk_ec2::primitives;
use aws_sdk_ec2::types;
use chrono::{DateTime, Utc};
use fleetctl_core::filter::ProjectFilter;
use fleetctl_core::types::{Instance, PROJECT_TAG, Snapshot, Tags, Volume};

/// Server-side filter for a scoped enumeration. An unscoped filter maps
/// to `None`: the API expresses "everything" by omitting the filter.
pub(super) fn project_filter(filter: &ProjectFilter) -> Option<types::Filter> {
    filter.project_name().map(|project| {
        types::Filter::builder()
            .name(format!("tag:{PROJECT_TAG}"))
            .values(project)
            .build()
    })
}

/// Resources the API reports without an id are unaddressable; they are
/// dropped rather than surfaced as errors.
pub(super) fn instance(instance: &types::Instance) -> Option<Instance> {
    let id = instance.instance_id()?.to_string();
    let tags: Tags = instance
        .tags()
        .iter()
        .filter_map(|tag| Some((tag.key()?.to_string(), tag.value()?.to_string())))
        .collect();
    Some(Instance {
        id,
        instance_type: instance
            .instance_type()
            .map(|instance_type| instance_type.as_str().to_string())
            .unwrap_or_default(),
        availability_zone: instance
            .placement()
            .and_then(|placement| placement.availability_zone())
            .unwrap_or_default()
            .to_string(),
        state: instance
            .state()
            .and_then(|state| state.name())
            .map(|name| name.as_str().to_string())
            .unwrap_or_default(),
        public_dns_name: instance.public_dns_name().unwrap_or_default().to_string(),
        tags,
    })
}

pub(super) fn volume(volume: &types::Volume) -> Option<Volume> {
    Some(Volume {
        id: volume.volume_id()?.to_string(),
        state: volume
            .state()
            .map(|state| state.as_str().to_string())
            .unwrap_or_default(),
        size_gib: volume.size().unwrap_or_default(),
        encrypted: volume.encrypted().unwrap_or_default(),
    })
}

pub(super) fn snapshot(snapshot: &types::Snapshot) -> Option<Snapshot> {
    Some(Snapshot {
        id: snapshot.snapshot_id()?.to_string(),
        state: snapshot
            .state()
            .map(|state| state.as_str())
            .unwrap_or_default()
            .into(),
        progress: snapshot.progress().unwrap_or_default().to_string(),
        started_at: snapshot.start_time().and_then(timestamp),
    })
}

/// The API leaves snapshot ordering unspecified; the listing truncation
/// and the pending check both depend on most-recent-first.
pub(super) fn newest_first(snapshots: &mut [Snapshot]) {
    snapshots.sort_by(|a, b| b.started_at.cmp(&a.started_at));
}

fn timestamp(at: &primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(at.secs(), at.subsec_nanos())
}
