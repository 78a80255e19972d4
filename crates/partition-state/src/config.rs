//! Configuration for the partition state store

use serde::{Deserialize, Serialize};

/// Partition sync configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionSyncConfig {
    /// Reject remote offsets that move backwards instead of only logging them
    pub reject_remote_regression: bool,
    /// Log a warning when the local consumer overtakes the remote consumer
    pub warn_on_local_overtake: bool,
}

impl Default for PartitionSyncConfig {
    fn default() -> Self {
        Self {
            reject_remote_regression: false,
            warn_on_local_overtake: true,
        }
    }
}
