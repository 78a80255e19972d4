//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::PartitionSyncResult;
use crate::domain::value_objects::{Offset, PartitionSnapshot, TopicPartition};

/// Primary partition state API
///
/// Called by the offset source (set operations) and by the consumption gate
/// (validation). All calls complete synchronously.
pub trait PartitionStateApi: Send + Sync {
    /// Record a new local consumer offset.
    ///
    /// Notifies the registered notifier if the derived state changes.
    fn set_local_offset(&self, topic: &str, partition: i32, offset: Offset)
        -> PartitionSyncResult<()>;

    /// Record a new remote consumer offset.
    ///
    /// Notifies the registered notifier if the derived state changes.
    fn set_remote_offset(
        &self,
        topic: &str,
        partition: i32,
        offset: Offset,
    ) -> PartitionSyncResult<()>;

    /// Check whether a fetched message may be consumed locally.
    ///
    /// Pure gate check: never advances the local offset.
    fn validate_local_message(
        &self,
        topic: &str,
        partition: i32,
        offset: Offset,
    ) -> PartitionSyncResult<()>;

    /// Current state and offsets, or `None` for an untracked partition.
    fn snapshot(&self, topic: &str, partition: i32) -> Option<PartitionSnapshot>;

    /// All partitions that have received at least one update.
    fn tracked_partitions(&self) -> Vec<TopicPartition>;
}
