use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};

/// Tag key that scopes instances to a project.
pub const PROJECT_TAG: &str = "Project";

/// Ordered string-to-string mapping of the tags attached to an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Lookup with a fallback for absent keys.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn project(&self) -> Option<&str> {
        self.get(PROJECT_TAG)
    }
}

impl FromIterator<(String, String)> for Tags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        Self(pairs.into_iter().collect())
    }
}

/// Observed attributes of a remote compute instance. The provider owns the
/// resource; this is a per-invocation handle, never persisted.
#[derive(Debug, Clone)]
pub struct Instance {
    pub id: String,
    pub instance_type: String,
    pub availability_zone: String,
    pub state: String,
    pub public_dns_name: String,
    pub tags: Tags,
}

/// Block-storage volume attached to an instance.
#[derive(Debug, Clone)]
pub struct Volume {
    pub id: String,
    pub state: String,
    pub size_gib: i32,
    pub encrypted: bool,
}

/// Point-in-time copy of a volume.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub id: String,
    pub state: SnapshotState,
    pub progress: String,
    pub started_at: Option<DateTime<Utc>>,
}

/// Snapshot lifecycle state as reported by the provider. States other than
/// pending/completed are carried verbatim so they can still be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotState {
    Pending,
    Completed,
    Other(String),
}

impl SnapshotState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SnapshotState::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SnapshotState::Completed)
    }
}

impl From<&str> for SnapshotState {
    fn from(state: &str) -> Self {
        match state {
            "pending" => SnapshotState::Pending,
            "completed" => SnapshotState::Completed,
            other => SnapshotState::Other(other.to_string()),
        }
    }
}

impl Display for SnapshotState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = match self {
            SnapshotState::Pending => "pending",
            SnapshotState::Completed => "completed",
            SnapshotState::Other(other) => other,
        };
        write!(f, "{}", value)
    }
}
