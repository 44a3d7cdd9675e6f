use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fleetctl_aws::AwsProvider;
use fleetctl_core::commands::{instances, snapshots, volumes};
use fleetctl_core::session::{self, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fleetctl", version)]
#[command(about = "Manage fleet instances, volumes and snapshots", long_about = None)]
struct Cli {
    /// Credential profile for the provider session
    #[arg(long, global = true, default_value = session::DEFAULT_PROFILE)]
    profile: String,

    /// Region override; defaults to the profile's configured region
    #[arg(long, global = true)]
    region: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commands for instances
    #[command(subcommand)]
    Instances(InstancesCommand),
    /// Commands for volumes
    #[command(subcommand)]
    Volumes(VolumesCommand),
    /// Commands for snapshots
    #[command(subcommand)]
    Snapshots(SnapshotsCommand),
}

#[derive(Subcommand)]
enum InstancesCommand {
    /// List instances
    List {
        /// Only instances tagged Project=<name>
        #[arg(long)]
        project: Option<String>,
    },
    /// Start instances
    Start {
        /// Only instances tagged Project=<name>
        #[arg(long)]
        project: Option<String>,
        /// Run against the whole fleet when no project is given
        #[arg(long)]
        force: bool,
    },
    /// Stop instances
    Stop {
        /// Only instances tagged Project=<name>
        #[arg(long)]
        project: Option<String>,
        /// Run against the whole fleet when no project is given
        #[arg(long)]
        force: bool,
    },
    /// Stop, then start instances, waiting on each transition
    Reboot {
        /// Only instances tagged Project=<name>
        #[arg(long)]
        project: Option<String>,
        /// Run against the whole fleet when no project is given
        #[arg(long)]
        force: bool,
    },
    /// Snapshot all volumes of each instance
    Snapshot {
        /// Only instances tagged Project=<name>
        #[arg(long)]
        project: Option<String>,
        /// Run against the whole fleet when no project is given
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum VolumesCommand {
    /// List volumes
    List {
        /// Only instances tagged Project=<name>
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Subcommand)]
enum SnapshotsCommand {
    /// List snapshots
    List {
        /// Only instances tagged Project=<name>
        #[arg(long)]
        project: Option<String>,
        /// Show every snapshot, not just the most recent completed one
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::new(cli.profile, cli.region);
    let provider = AwsProvider::connect(&session).await?;
    let mut out = io::stdout();

    match cli.command {
        Commands::Instances(command) => match command {
            InstancesCommand::List { project } => {
                instances::list(&provider, &project.into(), &mut out).await?
            }
            InstancesCommand::Start { project, force } => {
                instances::start(&provider, &project.into(), force, &mut out).await?
            }
            InstancesCommand::Stop { project, force } => {
                instances::stop(&provider, &project.into(), force, &mut out).await?
            }
            InstancesCommand::Reboot { project, force } => {
                instances::reboot(&provider, &project.into(), force, &mut out).await?
            }
            InstancesCommand::Snapshot { project, force } => {
                instances::snapshot(&provider, &project.into(), force, &mut out).await?
            }
        },
        Commands::Volumes(command) => match command {
            VolumesCommand::List { project } => {
                volumes::list(&provider, &project.into(), &mut out).await?
            }
        },
        Commands::Snapshots(command) => match command {
            SnapshotsCommand::List { project, all } => {
                snapshots::list(&provider, &project.into(), all, &mut out).await?
            }
        },
    }

    Ok(())
}
