use async_trait::async_trait;
use aws_sdk_ec2::Client as Ec2Client;
use aws_sdk_ec2::client::Waiters;
use aws_sdk_ec2::types::Filter;
use fleetctl_core::cloud_provider::{CloudProvider, ResourceStream};
use fleetctl_core::error::{ProviderError, Result};
use fleetctl_core::filter::ProjectFilter;
use fleetctl_core::session::Session;
use fleetctl_core::types::{Instance, Snapshot, Volume};
use futures::{StreamExt, stream};
use tokio::time::Duration;

use crate::{config, convert, error};

/// Ceiling for the blocking state waits, matching the classic EC2 waiter
/// budget of forty 15-second polls.
const STATE_WAIT_TIMEOUT: Duration = Duration::from_secs(600);

pub struct AwsProvider {
    ec2_client: Ec2Client,
}

impl AwsProvider {
    /// Establishes the session and fails fast when no region resolves.
    pub async fn connect(session: &Session) -> Result<Self> {
        let config = config::load(session).await?;
        tracing::debug!(
            profile = %session.profile,
            region = ?config.region(),
            "provider session established"
        );
        Ok(Self {
            ec2_client: Ec2Client::new(&config),
        })
    }
}

#[async_trait]
impl CloudProvider for AwsProvider {
    fn instances(&self, filter: &ProjectFilter) -> ResourceStream<'_, Instance> {
        let mut request = self.ec2_client.describe_instances();
        if let Some(project_filter) = convert::project_filter(filter) {
            request = request.filters(project_filter);
        }

        let pages = request.into_paginator().send();
        stream::unfold(pages, |mut pages| async move {
            let page = pages.next().await?;
            Some((page, pages))
        })
        .map(|page| {
            let instances: Vec<Result<Instance>> = match page {
                Ok(output) => output
                    .reservations()
                    .iter()
                    .flat_map(|reservation| reservation.instances())
                    .filter_map(convert::instance)
                    .map(Ok)
                    .collect(),
                Err(sdk_error) => {
                    vec![Err(error::provider_error("DescribeInstances", sdk_error))]
                }
            };
            stream::iter(instances)
        })
        .flatten()
        .boxed()
    }

    fn volumes(&self, instance_id: &str) -> ResourceStream<'_, Volume> {
        let pages = self
            .ec2_client
            .describe_volumes()
            .filters(
                Filter::builder()
                    .name("attachment.instance-id")
                    .values(instance_id)
                    .build(),
            )
            .into_paginator()
            .send();

        stream::unfold(pages, |mut pages| async move {
            let page = pages.next().await?;
            Some((page, pages))
        })
        .map(|page| {
            let volumes: Vec<Result<Volume>> = match page {
                Ok(output) => output
                    .volumes()
                    .iter()
                    .filter_map(convert::volume)
                    .map(Ok)
                    .collect(),
                Err(sdk_error) => {
                    vec![Err(error::provider_error("DescribeVolumes", sdk_error))]
                }
            };
            stream::iter(volumes)
        })
        .flatten()
        .boxed()
    }

    /// Snapshots are the one enumeration that cannot stay page-lazy: the
    /// pages are drained up front so the result can be ordered most
    /// recent first.
    fn snapshots(&self, volume_id: &str) -> ResourceStream<'_, Snapshot> {
        let request = self.ec2_client.describe_snapshots().filters(
            Filter::builder()
                .name("volume-id")
                .values(volume_id)
                .build(),
        );

        stream::once(async move {
            let mut items = request.into_paginator().items().send();
            let mut snapshots: Vec<Snapshot> = Vec::new();
            while let Some(item) = items.next().await {
                match item {
                    Ok(reported) => snapshots.extend(convert::snapshot(&reported)),
                    Err(sdk_error) => {
                        let failure: Vec<Result<Snapshot>> =
                            vec![Err(error::provider_error("DescribeSnapshots", sdk_error))];
                        return stream::iter(failure);
                    }
                }
            }
            convert::newest_first(&mut snapshots);
            let ordered: Vec<Result<Snapshot>> = snapshots.into_iter().map(Ok).collect();
            stream::iter(ordered)
        })
        .flatten()
        .boxed()
    }

    async fn start_instance(&self, instance_id: &str) -> Result<()> {
        tracing::debug!(instance_id, "requesting instance start");
        self.ec2_client
            .start_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|sdk_error| error::provider_error("StartInstances", sdk_error))?;
        Ok(())
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<()> {
        tracing::debug!(instance_id, "requesting instance stop");
        self.ec2_client
            .stop_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|sdk_error| error::provider_error("StopInstances", sdk_error))?;
        Ok(())
    }

    async fn wait_until_stopped(&self, instance_id: &str) -> Result<()> {
        tracing::debug!(instance_id, "waiting for instance to stop");
        self.ec2_client
            .wait_until_instance_stopped()
            .instance_ids(instance_id)
            .wait(STATE_WAIT_TIMEOUT)
            .await
            .map_err(|wait_failure| error::wait_error(instance_id, "stopped", wait_failure))?;
        Ok(())
    }

    async fn wait_until_running(&self, instance_id: &str) -> Result<()> {
        tracing::debug!(instance_id, "waiting for instance to run");
        self.ec2_client
            .wait_until_instance_running()
            .instance_ids(instance_id)
            .wait(STATE_WAIT_TIMEOUT)
            .await
            .map_err(|wait_failure| error::wait_error(instance_id, "running", wait_failure))?;
        Ok(())
    }

    async fn create_snapshot(&self, volume_id: &str, description: &str) -> Result<String> {
        tracing::debug!(volume_id, "requesting snapshot");
        let output = self
            .ec2_client
            .create_snapshot()
            .volume_id(volume_id)
            .description(description)
            .send()
            .await
            .map_err(|sdk_error| error::provider_error("CreateSnapshot", sdk_error))?;

        output
            .snapshot_id()
            .map(ToString::to_string)
            .ok_or_else(|| {
                ProviderError::Unexpected {
                    operation: "CreateSnapshot",
                    detail: "response carried no snapshot id".to_string(),
                }
                .into()
            })
    }
}
