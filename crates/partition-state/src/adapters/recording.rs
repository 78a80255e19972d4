//! Recording Notifier Adapter
//!
//! Keeps every state change in memory so owners can inspect the transition
//! history of their partitions.

use crate::domain::entities::StateChange;
use crate::ports::outbound::StateChangeNotifier;
use parking_lot::Mutex;
use std::sync::Arc;

/// Notifier that appends each change to a shared history.
///
/// Clones share the same history, so one clone can be handed to the
/// manager while another is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    changes: Arc<Mutex<Vec<StateChange>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all changes recorded so far, oldest first.
    pub fn changes(&self) -> Vec<StateChange> {
        self.changes.lock().clone()
    }

    /// Most recent change, if any.
    pub fn last(&self) -> Option<StateChange> {
        self.changes.lock().last().cloned()
    }

    /// Drain the history.
    pub fn take(&self) -> Vec<StateChange> {
        std::mem::take(&mut *self.changes.lock())
    }

    pub fn len(&self) -> usize {
        self.changes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.lock().is_empty()
    }
}

impl StateChangeNotifier for RecordingNotifier {
    fn on_state_change(&self, change: &StateChange) {
        self.changes.lock().push(change.clone());
    }
}
