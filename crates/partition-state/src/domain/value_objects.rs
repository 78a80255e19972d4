//! Value objects for partition state tracking
//!
//! Offsets, the derived relationship state, and the partition key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position within a partition.
pub type Offset = i64;

/// Identity of a partition record: `(topic, partition)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopicPartition {
    pub topic: String,
    pub partition: i32,
}

impl TopicPartition {
    pub fn new(topic: impl Into<String>, partition: i32) -> Self {
        Self {
            topic: topic.into(),
            partition,
        }
    }
}

impl fmt::Display for TopicPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.topic, self.partition)
    }
}

/// Last observed local and remote offsets.
///
/// `None` on either side means that side has not been observed yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offsets {
    pub local: Option<Offset>,
    pub remote: Option<Offset>,
}

impl Offsets {
    pub fn new(local: Option<Offset>, remote: Option<Offset>) -> Self {
        Self { local, remote }
    }

    /// Copy with the local side replaced; remote carries forward.
    pub fn with_local(self, local: Offset) -> Self {
        Self {
            local: Some(local),
            remote: self.remote,
        }
    }

    /// Copy with the remote side replaced; local carries forward.
    pub fn with_remote(self, remote: Offset) -> Self {
        Self {
            local: self.local,
            remote: Some(remote),
        }
    }
}

/// Relationship between the local and remote consumer of a partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartitionState {
    /// Not enough data yet: at least one side is unobserved.
    Unknown,
    /// Remote is ahead. The local consumer may advance.
    LocalBehind,
    /// Local has overtaken remote. The local consumer should pause.
    RemoteBehind,
    /// Local equals remote. The local consumer should pause.
    Synchronized,
}

impl PartitionState {
    /// Derive the state by comparing local and remote offsets.
    pub fn from_offsets(offsets: &Offsets) -> Self {
        match (offsets.local, offsets.remote) {
            (Some(local), Some(remote)) => match local.cmp(&remote) {
                std::cmp::Ordering::Less => PartitionState::LocalBehind,
                std::cmp::Ordering::Greater => PartitionState::RemoteBehind,
                std::cmp::Ordering::Equal => PartitionState::Synchronized,
            },
            _ => PartitionState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionState::Unknown => "UNKNOWN",
            PartitionState::LocalBehind => "LOCAL_BEHIND",
            PartitionState::RemoteBehind => "REMOTE_BEHIND",
            PartitionState::Synchronized => "SYNCHRONIZED",
        }
    }
}

impl fmt::Display for PartitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render an optional state, using `NONE` for an untracked partition.
pub fn state_label(state: Option<PartitionState>) -> &'static str {
    state.map_or("NONE", |s| s.as_str())
}

/// Point-in-time view of a partition record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSnapshot {
    /// `None` until the first update has been applied.
    pub state: Option<PartitionState>,
    pub offsets: Offsets,
}

impl PartitionSnapshot {
    pub fn new(state: Option<PartitionState>, offsets: Offsets) -> Self {
        Self { state, offsets }
    }
}
