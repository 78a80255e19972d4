//! Core entities for partition state tracking

use super::value_objects::{Offset, Offsets, PartitionSnapshot, PartitionState, TopicPartition};
use serde::{Deserialize, Serialize};

/// Which side of the offset pair an update targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OffsetSide {
    Local,
    Remote,
}

impl OffsetSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OffsetSide::Local => "local",
            OffsetSide::Remote => "remote",
        }
    }
}

/// Stored state for one partition.
///
/// Starts untracked (`state == None`) with both offsets absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionRecord {
    state: Option<PartitionState>,
    offsets: Offsets,
}

impl PartitionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<PartitionState> {
        self.state
    }

    pub fn offsets(&self) -> Offsets {
        self.offsets
    }

    pub fn snapshot(&self) -> PartitionSnapshot {
        PartitionSnapshot::new(self.state, self.offsets)
    }

    /// Last stored offset for one side.
    pub fn offset(&self, side: OffsetSide) -> Option<Offset> {
        match side {
            OffsetSide::Local => self.offsets.local,
            OffsetSide::Remote => self.offsets.remote,
        }
    }

    /// Compute the snapshot an update would produce, without applying it.
    pub fn propose(&self, side: OffsetSide, value: Offset) -> PartitionSnapshot {
        let offsets = match side {
            OffsetSide::Local => self.offsets.with_local(value),
            OffsetSide::Remote => self.offsets.with_remote(value),
        };
        PartitionSnapshot::new(Some(PartitionState::from_offsets(&offsets)), offsets)
    }

    /// Store a previously proposed snapshot.
    ///
    /// The state is re-derived from the offsets so the record can never hold
    /// a state that disagrees with its offsets.
    pub fn commit(&mut self, offsets: Offsets) {
        self.state = Some(PartitionState::from_offsets(&offsets));
        self.offsets = offsets;
    }

    /// Build a record with arbitrary contents, bypassing derivation.
    #[cfg(test)]
    pub(crate) fn forced(state: Option<PartitionState>, offsets: Offsets) -> Self {
        Self { state, offsets }
    }
}

/// What the owner of the local consumer is expected to do after a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumerAction {
    /// Local consumer may fetch again.
    Resume,
    /// Local consumer has caught up with or passed the remote consumer.
    Pause,
    /// Not enough information yet; leave the consumer as it is.
    Hold,
}

/// Notification emitted whenever a partition's derived state changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub topic_partition: TopicPartition,
    pub previous: PartitionSnapshot,
    pub updated: PartitionSnapshot,
}

impl StateChange {
    pub fn new(
        topic_partition: TopicPartition,
        previous: PartitionSnapshot,
        updated: PartitionSnapshot,
    ) -> Self {
        Self {
            topic_partition,
            previous,
            updated,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic_partition.topic
    }

    pub fn partition(&self) -> i32 {
        self.topic_partition.partition
    }

    /// Map the new state to a pause/resume directive for the local consumer.
    pub fn consumer_action(&self) -> ConsumerAction {
        match self.updated.state {
            Some(PartitionState::LocalBehind) => ConsumerAction::Resume,
            Some(PartitionState::RemoteBehind) | Some(PartitionState::Synchronized) => {
                ConsumerAction::Pause
            }
            Some(PartitionState::Unknown) | None => ConsumerAction::Hold,
        }
    }
}
