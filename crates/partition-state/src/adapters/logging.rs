//! Logging Notifier Adapter

use crate::domain::entities::StateChange;
use crate::domain::value_objects::state_label;
use crate::ports::outbound::StateChangeNotifier;
use tracing::info;

/// Notifier that writes each change to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl StateChangeNotifier for TracingNotifier {
    fn on_state_change(&self, change: &StateChange) {
        info!(
            topic = change.topic(),
            partition = change.partition(),
            from = state_label(change.previous.state),
            to = state_label(change.updated.state),
            local = ?change.updated.offsets.local,
            remote = ?change.updated.offsets.remote,
            action = ?change.consumer_action(),
            "Partition state changed"
        );
    }
}
