//! Partition State Manager
//!
//! Main service implementing `PartitionStateApi`.

use crate::config::PartitionSyncConfig;
use crate::domain::entities::{OffsetSide, PartitionRecord, StateChange};
use crate::domain::errors::{PartitionSyncError, PartitionSyncResult};
use crate::domain::invariants::{invariant_state_matches_offsets, invariant_transition_permitted};
use crate::domain::transitions::is_transition_allowed;
use crate::domain::value_objects::{
    state_label, Offset, PartitionSnapshot, PartitionState, TopicPartition,
};
use crate::metrics;
use crate::ports::inbound::PartitionStateApi;
use crate::ports::outbound::StateChangeNotifier;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

type SharedRecord = Arc<Mutex<PartitionRecord>>;

/// Tracks local consumer progress relative to a remote consumer, per partition.
///
/// Each update runs as one critical section per partition:
/// 1. Get or create the record
/// 2. Check for offset regression
/// 3. Derive the new state and validate the transition
/// 4. Store the new offsets
/// 5. Notify on state change
///
/// Different partitions never contend on the same lock.
pub struct PartitionStateManager<N: StateChangeNotifier> {
    config: PartitionSyncConfig,
    partitions: RwLock<HashMap<TopicPartition, SharedRecord>>,
    notifier: N,
}

impl<N: StateChangeNotifier> PartitionStateManager<N> {
    /// Create a new manager with default config
    pub fn new(notifier: N) -> Self {
        Self::with_config(PartitionSyncConfig::default(), notifier)
    }

    /// Create a new manager with custom config
    pub fn with_config(config: PartitionSyncConfig, notifier: N) -> Self {
        Self {
            config,
            partitions: RwLock::new(HashMap::new()),
            notifier,
        }
    }

    pub fn config(&self) -> &PartitionSyncConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Number of tracked partitions
    pub fn len(&self) -> usize {
        self.partitions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.read().is_empty()
    }

    fn lookup(&self, topic_partition: &TopicPartition) -> Option<SharedRecord> {
        self.partitions.read().get(topic_partition).cloned()
    }

    /// Get the record for a partition, creating an untracked one if needed.
    fn get_or_create(&self, topic_partition: &TopicPartition) -> SharedRecord {
        if let Some(record) = self.lookup(topic_partition) {
            return record;
        }

        let mut partitions = self.partitions.write();
        let record = partitions
            .entry(topic_partition.clone())
            .or_default()
            .clone();
        metrics::set_tracked_partitions(partitions.len());
        record
    }

    /// Apply a new offset for one side of a partition.
    fn apply_offset(
        &self,
        topic: &str,
        partition: i32,
        side: OffsetSide,
        value: Offset,
    ) -> PartitionSyncResult<()> {
        let topic_partition = TopicPartition::new(topic, partition);
        let shared = self.get_or_create(&topic_partition);
        let mut record = shared.lock();

        if let Some(previous) = record.offset(side).filter(|previous| value < *previous) {
            metrics::record_offset_regression(side.as_str());

            if side == OffsetSide::Remote && self.config.reject_remote_regression {
                warn!(
                    topic,
                    partition,
                    current = value,
                    previous,
                    "Rejecting remote offset that moved backwards"
                );
                return Err(PartitionSyncError::RemoteOffsetRegressed {
                    topic_partition,
                    previous,
                    current: value,
                });
            }

            info!(
                topic,
                partition,
                side = side.as_str(),
                current = value,
                previous,
                "Offset has moved backwards"
            );
        }

        let previous = record.snapshot();
        let updated = record.propose(side, value);
        let updated_state = PartitionState::from_offsets(&updated.offsets);

        if !is_transition_allowed(previous.state, updated_state) {
            metrics::record_transition_rejected();
            return Err(PartitionSyncError::InvalidStateTransition {
                topic_partition,
                from: previous.state,
                to: updated_state,
            });
        }

        record.commit(updated.offsets);
        debug_assert!(invariant_state_matches_offsets(&record));

        if previous.state == Some(updated_state) {
            debug!(
                topic,
                partition,
                side = side.as_str(),
                offset = value,
                state = %updated_state,
                "Offset updated without state change"
            );
            return Ok(());
        }

        metrics::record_transition(updated_state.as_str());

        if side == OffsetSide::Local
            && updated_state == PartitionState::RemoteBehind
            && self.config.warn_on_local_overtake
        {
            warn!(
                topic,
                partition,
                local = ?updated.offsets.local,
                remote = ?updated.offsets.remote,
                "Current local offset exceeds remote offset"
            );
        }

        debug!(
            topic,
            partition,
            from = state_label(previous.state),
            to = %updated_state,
            "Partition state transition"
        );

        let change = StateChange::new(topic_partition, previous, updated);
        debug_assert!(invariant_transition_permitted(&change));

        // Called with the partition lock held so notifications for one
        // partition are delivered in transition order.
        self.notifier.on_state_change(&change);
        Ok(())
    }

    /// Replace a record outright, bypassing validation.
    #[cfg(test)]
    pub(crate) fn force_record(&self, topic_partition: TopicPartition, record: PartitionRecord) {
        self.partitions
            .write()
            .insert(topic_partition, Arc::new(Mutex::new(record)));
    }
}

impl<N: StateChangeNotifier> PartitionStateApi for PartitionStateManager<N> {
    fn set_local_offset(
        &self,
        topic: &str,
        partition: i32,
        offset: Offset,
    ) -> PartitionSyncResult<()> {
        self.apply_offset(topic, partition, OffsetSide::Local, offset)
    }

    fn set_remote_offset(
        &self,
        topic: &str,
        partition: i32,
        offset: Offset,
    ) -> PartitionSyncResult<()> {
        self.apply_offset(topic, partition, OffsetSide::Remote, offset)
    }

    fn validate_local_message(
        &self,
        topic: &str,
        partition: i32,
        offset: Offset,
    ) -> PartitionSyncResult<()> {
        let topic_partition = TopicPartition::new(topic, partition);
        let snapshot = self
            .lookup(&topic_partition)
            .map(|record| record.lock().snapshot())
            .unwrap_or_default();

        let (local, remote) = match (
            snapshot.state,
            snapshot.offsets.local,
            snapshot.offsets.remote,
        ) {
            (Some(PartitionState::LocalBehind), Some(local), Some(remote)) => (local, remote),
            (state, _, _) => {
                let err = PartitionSyncError::InvalidState {
                    topic_partition,
                    state,
                };
                metrics::record_message_rejected(err.reason());
                return Err(err);
            }
        };

        if offset >= remote {
            let err = PartitionSyncError::MessageNotReady {
                topic_partition,
                offset,
                remote,
            };
            metrics::record_message_rejected(err.reason());
            return Err(err);
        }

        if offset < local {
            warn!(
                topic,
                partition,
                offset,
                local,
                "Received a message prior to local offset (local consumer offset rewound without update?)"
            );
        }

        Ok(())
    }

    fn snapshot(&self, topic: &str, partition: i32) -> Option<PartitionSnapshot> {
        self.lookup(&TopicPartition::new(topic, partition))
            .map(|record| record.lock().snapshot())
    }

    fn tracked_partitions(&self) -> Vec<TopicPartition> {
        let mut partitions: Vec<_> = self.partitions.read().keys().cloned().collect();
        partitions.sort();
        partitions
    }
}
