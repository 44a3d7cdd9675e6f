//! In-memory provider double used by the command tests. Records every
//! call so tests can assert on ordering and on calls that must not
//! happen at all.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;
use futures::{StreamExt, stream};

use crate::cloud_provider::{CloudProvider, ResourceStream};
use crate::error::{Error, ProviderError, Result};
use crate::filter::ProjectFilter;
use crate::types::{Instance, PROJECT_TAG, Snapshot, SnapshotState, Tags, Volume};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Instances { filter: ProjectFilter },
    Volumes { instance_id: String },
    Snapshots { volume_id: String },
    Start { instance_id: String },
    Stop { instance_id: String },
    WaitUntilStopped { instance_id: String },
    WaitUntilRunning { instance_id: String },
    CreateSnapshot { volume_id: String, description: String },
}

#[derive(Default)]
pub(crate) struct StubProvider {
    instances: Vec<Instance>,
    volumes: BTreeMap<String, Vec<Volume>>,
    snapshots: BTreeMap<String, Vec<Snapshot>>,
    rejected_starts: BTreeSet<String>,
    rejected_stops: BTreeSet<String>,
    failed_waits: BTreeSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl StubProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_instances(mut self, instances: Vec<Instance>) -> Self {
        self.instances = instances;
        self
    }

    pub(crate) fn with_volumes(mut self, instance_id: &str, volumes: Vec<Volume>) -> Self {
        self.volumes.insert(instance_id.to_string(), volumes);
        self
    }

    /// Snapshot fixtures are stored the way the provider reports them:
    /// most recent first.
    pub(crate) fn with_snapshots(mut self, volume_id: &str, snapshots: Vec<Snapshot>) -> Self {
        self.snapshots.insert(volume_id.to_string(), snapshots);
        self
    }

    /// Start requests for this instance are answered with an API
    /// rejection.
    pub(crate) fn rejecting_start(mut self, instance_id: &str) -> Self {
        self.rejected_starts.insert(instance_id.to_string());
        self
    }

    pub(crate) fn rejecting_stop(mut self, instance_id: &str) -> Self {
        self.rejected_stops.insert(instance_id.to_string());
        self
    }

    /// State waits for this instance give up instead of completing.
    pub(crate) fn failing_wait(mut self, instance_id: &str) -> Self {
        self.failed_waits.insert(instance_id.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn rejection(operation: &'static str, instance_id: &str) -> Error {
        ProviderError::Api {
            operation,
            code: Some("IncorrectInstanceState".to_string()),
            message: format!("{instance_id} is not in a valid state for this operation"),
        }
        .into()
    }
}

#[async_trait]
impl CloudProvider for StubProvider {
    fn instances(&self, filter: &ProjectFilter) -> ResourceStream<'_, Instance> {
        self.record(Call::Instances {
            filter: filter.clone(),
        });
        let matching: Vec<Result<Instance>> = self
            .instances
            .iter()
            .filter(|instance| match filter.project_name() {
                Some(project) => instance.tags.project() == Some(project),
                None => true,
            })
            .cloned()
            .map(Ok)
            .collect();
        stream::iter(matching).boxed()
    }

    fn volumes(&self, instance_id: &str) -> ResourceStream<'_, Volume> {
        self.record(Call::Volumes {
            instance_id: instance_id.to_string(),
        });
        let volumes: Vec<Result<Volume>> = self
            .volumes
            .get(instance_id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(Ok)
            .collect();
        stream::iter(volumes).boxed()
    }

    fn snapshots(&self, volume_id: &str) -> ResourceStream<'_, Snapshot> {
        self.record(Call::Snapshots {
            volume_id: volume_id.to_string(),
        });
        let snapshots: Vec<Result<Snapshot>> = self
            .snapshots
            .get(volume_id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(Ok)
            .collect();
        stream::iter(snapshots).boxed()
    }

    async fn start_instance(&self, instance_id: &str) -> Result<()> {
        self.record(Call::Start {
            instance_id: instance_id.to_string(),
        });
        if self.rejected_starts.contains(instance_id) {
            return Err(Self::rejection("StartInstances", instance_id));
        }
        Ok(())
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<()> {
        self.record(Call::Stop {
            instance_id: instance_id.to_string(),
        });
        if self.rejected_stops.contains(instance_id) {
            return Err(Self::rejection("StopInstances", instance_id));
        }
        Ok(())
    }

    async fn wait_until_stopped(&self, instance_id: &str) -> Result<()> {
        self.record(Call::WaitUntilStopped {
            instance_id: instance_id.to_string(),
        });
        if self.failed_waits.contains(instance_id) {
            return Err(ProviderError::Wait {
                instance_id: instance_id.to_string(),
                target_state: "stopped",
                reason: "exceeded maximum wait time".to_string(),
            }
            .into());
        }
        Ok(())
    }

    async fn wait_until_running(&self, instance_id: &str) -> Result<()> {
        self.record(Call::WaitUntilRunning {
            instance_id: instance_id.to_string(),
        });
        if self.failed_waits.contains(instance_id) {
            return Err(ProviderError::Wait {
                instance_id: instance_id.to_string(),
                target_state: "running",
                reason: "exceeded maximum wait time".to_string(),
            }
            .into());
        }
        Ok(())
    }

    async fn create_snapshot(&self, volume_id: &str, description: &str) -> Result<String> {
        self.record(Call::CreateSnapshot {
            volume_id: volume_id.to_string(),
            description: description.to_string(),
        });
        Ok(format!("snap-for-{volume_id}"))
    }
}

pub(crate) fn instance(id: &str, project: Option<&str>) -> Instance {
    let tags: Tags = project
        .into_iter()
        .map(|name| (PROJECT_TAG.to_string(), name.to_string()))
        .collect();
    Instance {
        id: id.to_string(),
        instance_type: "t2.micro".to_string(),
        availability_zone: "us-east-1a".to_string(),
        state: "running".to_string(),
        public_dns_name: format!("{id}.compute-1.amazonaws.com"),
        tags,
    }
}

pub(crate) fn volume(id: &str) -> Volume {
    Volume {
        id: id.to_string(),
        state: "in-use".to_string(),
        size_gib: 8,
        encrypted: false,
    }
}

pub(crate) fn snapshot(id: &str, state: SnapshotState) -> Snapshot {
    Snapshot {
        id: id.to_string(),
        state,
        progress: "100%".to_string(),
        started_at: DateTime::from_timestamp(1_700_000_000, 0),
    }
}
