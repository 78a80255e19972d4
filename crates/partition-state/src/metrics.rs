//! # Partition State Metrics
//!
//! Prometheus metrics for the partition state store.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! partition-state = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `partition_state_transitions_total` - Counter of applied transitions (by target state)
//! - `partition_state_transitions_rejected_total` - Counter of rejected transitions
//! - `partition_state_messages_rejected_total` - Counter of gated messages (by reason)
//! - `partition_state_offset_regressions_total` - Counter of backward offsets (by side)
//! - `partition_state_tracked_partitions` - Gauge of tracked partitions

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, IntCounter,
    IntCounterVec, IntGauge,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Applied transitions, labeled by target state
    pub static ref TRANSITIONS: IntCounterVec = register_int_counter_vec!(
        "partition_state_transitions_total",
        "Total number of partition state transitions applied",
        &["to"]
    )
    .expect("Failed to create TRANSITIONS metric");

    /// Rejected transitions
    pub static ref TRANSITIONS_REJECTED: IntCounter = register_int_counter!(
        "partition_state_transitions_rejected_total",
        "Total number of partition state transitions rejected"
    )
    .expect("Failed to create TRANSITIONS_REJECTED metric");

    /// Messages refused by the consumption gate, labeled by reason
    pub static ref MESSAGES_REJECTED: IntCounterVec = register_int_counter_vec!(
        "partition_state_messages_rejected_total",
        "Total number of local messages refused by the consumption gate",
        &["reason"]
    )
    .expect("Failed to create MESSAGES_REJECTED metric");

    /// Offsets that moved backwards, labeled by side
    pub static ref OFFSET_REGRESSIONS: IntCounterVec = register_int_counter_vec!(
        "partition_state_offset_regressions_total",
        "Total number of offsets reported below the previously stored value",
        &["side"]
    )
    .expect("Failed to create OFFSET_REGRESSIONS metric");

    /// Number of tracked partitions
    pub static ref TRACKED_PARTITIONS: IntGauge = register_int_gauge!(
        "partition_state_tracked_partitions",
        "Number of partitions with at least one offset update"
    )
    .expect("Failed to create TRACKED_PARTITIONS metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

/// Record an applied state transition
#[cfg(feature = "metrics")]
pub fn record_transition(to: &str) {
    TRANSITIONS.with_label_values(&[to]).inc();
}

/// Record a rejected state transition
#[cfg(feature = "metrics")]
pub fn record_transition_rejected() {
    TRANSITIONS_REJECTED.inc();
}

/// Record a message refused by the gate
#[cfg(feature = "metrics")]
pub fn record_message_rejected(reason: &str) {
    MESSAGES_REJECTED.with_label_values(&[reason]).inc();
}

/// Record an offset that moved backwards
#[cfg(feature = "metrics")]
pub fn record_offset_regression(side: &str) {
    OFFSET_REGRESSIONS.with_label_values(&[side]).inc();
}

/// Update the tracked partitions gauge
#[cfg(feature = "metrics")]
pub fn set_tracked_partitions(count: usize) {
    TRACKED_PARTITIONS.set(count as i64);
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_transition(_to: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_transition_rejected() {}

#[cfg(not(feature = "metrics"))]
pub fn record_message_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_offset_regression(_side: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn set_tracked_partitions(_count: usize) {}
