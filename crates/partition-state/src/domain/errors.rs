//! Error types for partition state tracking

use super::value_objects::{state_label, Offset, PartitionState, TopicPartition};
use thiserror::Error;

/// Errors raised by the partition state store.
///
/// Each error is local to the call and key that triggered it; the stored
/// record is never modified when an error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionSyncError {
    /// The derived state is not a permitted successor of the current state
    #[error(
        "Unexpected state transition from {} to {to} on {topic_partition}",
        state_label(*.from)
    )]
    InvalidStateTransition {
        topic_partition: TopicPartition,
        from: Option<PartitionState>,
        to: PartitionState,
    },

    /// A message was offered while the partition is not `LOCAL_BEHIND`
    #[error(
        "Received a message on {topic_partition} while consumer is in {} state, expected LOCAL_BEHIND",
        state_label(*.state)
    )]
    InvalidState {
        topic_partition: TopicPartition,
        state: Option<PartitionState>,
    },

    /// The remote consumer has not committed past this offset yet
    #[error(
        "Message at offset {offset} on {topic_partition} has not been committed by remote consumer (remote offset {remote})"
    )]
    MessageNotReady {
        topic_partition: TopicPartition,
        offset: Offset,
        remote: Offset,
    },

    /// Remote offset moved backwards while strict regression checks are on
    #[error("Remote offset on {topic_partition} moved backwards: {current} < {previous}")]
    RemoteOffsetRegressed {
        topic_partition: TopicPartition,
        previous: Offset,
        current: Offset,
    },
}

impl PartitionSyncError {
    /// Whether the caller should hold the message and check again later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PartitionSyncError::MessageNotReady { .. })
    }

    pub fn topic_partition(&self) -> &TopicPartition {
        match self {
            PartitionSyncError::InvalidStateTransition {
                topic_partition, ..
            }
            | PartitionSyncError::InvalidState {
                topic_partition, ..
            }
            | PartitionSyncError::MessageNotReady {
                topic_partition, ..
            }
            | PartitionSyncError::RemoteOffsetRegressed {
                topic_partition, ..
            } => topic_partition,
        }
    }

    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            PartitionSyncError::InvalidStateTransition { .. } => "invalid_state_transition",
            PartitionSyncError::InvalidState { .. } => "invalid_state",
            PartitionSyncError::MessageNotReady { .. } => "message_not_ready",
            PartitionSyncError::RemoteOffsetRegressed { .. } => "remote_offset_regressed",
        }
    }
}

/// Result type for partition state operations
pub type PartitionSyncResult<T> = Result<T, PartitionSyncError>;
