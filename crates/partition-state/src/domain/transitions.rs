//! Allowed state transitions
//!
//! ```text
//! [NONE] ──→ [UNKNOWN] ──→ {LOCAL_BEHIND, REMOTE_BEHIND, SYNCHRONIZED}
//!
//! [LOCAL_BEHIND]  ←──→ [SYNCHRONIZED] ←──→ [REMOTE_BEHIND]
//!        ↑                                        │
//!        └────────────────────────────────────────┘ (both directions)
//! ```
//!
//! Nothing ever returns to `UNKNOWN` once both offsets are known, and a
//! tracked partition never returns to `NONE`.

use super::value_objects::PartitionState;

const FROM_NONE: &[PartitionState] = &[PartitionState::Unknown];

const FROM_UNKNOWN: &[PartitionState] = &[
    PartitionState::LocalBehind,
    PartitionState::RemoteBehind,
    PartitionState::Synchronized,
];

const FROM_REMOTE_BEHIND: &[PartitionState] =
    &[PartitionState::LocalBehind, PartitionState::Synchronized];

const FROM_LOCAL_BEHIND: &[PartitionState] =
    &[PartitionState::Synchronized, PartitionState::RemoteBehind];

const FROM_SYNCHRONIZED: &[PartitionState] =
    &[PartitionState::LocalBehind, PartitionState::RemoteBehind];

/// States reachable from `from` in a single update.
///
/// Self-transitions are not listed; they are always allowed.
pub fn permitted_successors(from: Option<PartitionState>) -> &'static [PartitionState] {
    match from {
        None => FROM_NONE,
        Some(PartitionState::Unknown) => FROM_UNKNOWN,
        Some(PartitionState::RemoteBehind) => FROM_REMOTE_BEHIND,
        Some(PartitionState::LocalBehind) => FROM_LOCAL_BEHIND,
        Some(PartitionState::Synchronized) => FROM_SYNCHRONIZED,
    }
}

/// Check whether moving from `from` to `to` is a legal transition.
pub fn is_transition_allowed(from: Option<PartitionState>, to: PartitionState) -> bool {
    from == Some(to) || permitted_successors(from).contains(&to)
}
