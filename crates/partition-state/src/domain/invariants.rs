//! Domain invariants for partition state tracking

use super::entities::{PartitionRecord, StateChange};
use super::transitions::is_transition_allowed;
use super::value_objects::PartitionState;

/// INVARIANT-1: Derived State
/// A tracked record's state is exactly the state derived from its offsets.
pub fn invariant_state_matches_offsets(record: &PartitionRecord) -> bool {
    match record.state() {
        None => record.offsets().local.is_none() && record.offsets().remote.is_none(),
        Some(state) => state == PartitionState::from_offsets(&record.offsets()),
    }
}

/// INVARIANT-2: Legal Transitions
/// Every emitted change follows the transition table and actually changes state.
pub fn invariant_transition_permitted(change: &StateChange) -> bool {
    match change.updated.state {
        None => false,
        Some(to) => {
            change.previous.state != Some(to) && is_transition_allowed(change.previous.state, to)
        }
    }
}
