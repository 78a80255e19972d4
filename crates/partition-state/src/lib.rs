//! # partition-state
//!
//! Tracks how far a local consumer of a stream partition has progressed
//! relative to an independent remote consumer of the same partition, and
//! gates local consumption so it never reads past what the remote consumer
//! has committed.
//!
//! ## Architecture
//!
//! - **Domain**: Offsets, `PartitionState`, transition table, errors, invariants
//! - **Ports**: Inbound (`PartitionStateApi`) and Outbound (`StateChangeNotifier`)
//! - **Application**: `PartitionStateManager` orchestrating updates and validation
//! - **Adapters**: Channel, recording, and logging notifiers
//!
//! ## State Machine
//!
//! ```text
//! [NONE] ──first offset──→ [UNKNOWN] ──both offsets known──→ [LOCAL_BEHIND]
//!                                                          ├→ [SYNCHRONIZED]
//!                                                          └→ [REMOTE_BEHIND]
//!
//! LOCAL_BEHIND   local < remote   consumer may advance (resume)
//! SYNCHRONIZED   local == remote  consumer must pause
//! REMOTE_BEHIND  local > remote   consumer must pause
//! ```
//!
//! ## Example
//!
//! ```rust
//! use partition_state::{PartitionState, PartitionStateApi, PartitionStateManager, StateChange};
//!
//! let manager = PartitionStateManager::new(|change: &StateChange| {
//!     println!("{} -> {:?}", change.topic_partition, change.consumer_action());
//! });
//!
//! manager.set_remote_offset("events", 0, 100).unwrap();
//! manager.set_local_offset("events", 0, 50).unwrap();
//! assert_eq!(
//!     manager.snapshot("events", 0).unwrap().state,
//!     Some(PartitionState::LocalBehind)
//! );
//!
//! // Remote has committed past 60, so the local consumer may process it.
//! assert!(manager.validate_local_message("events", 0, 60).is_ok());
//! // Offset 100 is not committed remotely yet.
//! assert!(manager.validate_local_message("events", 0, 100).is_err());
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;

pub use adapters::{ChannelNotifier, RecordingNotifier, TracingNotifier};
pub use application::PartitionStateManager;
pub use config::PartitionSyncConfig;
pub use domain::entities::{ConsumerAction, OffsetSide, PartitionRecord, StateChange};
pub use domain::errors::{PartitionSyncError, PartitionSyncResult};
pub use domain::transitions::{is_transition_allowed, permitted_successors};
pub use domain::value_objects::{
    state_label, Offset, Offsets, PartitionSnapshot, PartitionState, TopicPartition,
};
pub use ports::inbound::PartitionStateApi;
pub use ports::outbound::{NoopNotifier, StateChangeNotifier};
