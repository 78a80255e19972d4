//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::StateChange;

/// Receiver of state-change notifications.
///
/// Invoked synchronously on the updating thread, at most once per update and
/// only when the derived state changes. The partition's lock is held for the
/// duration of the call, so implementations must not update the same
/// partition from inside `on_state_change`.
pub trait StateChangeNotifier: Send + Sync {
    fn on_state_change(&self, change: &StateChange);
}

impl<F> StateChangeNotifier for F
where
    F: Fn(&StateChange) + Send + Sync,
{
    fn on_state_change(&self, change: &StateChange) {
        self(change)
    }
}

/// Notifier that discards every change.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifier;

impl StateChangeNotifier for NoopNotifier {
    fn on_state_change(&self, _change: &StateChange) {}
}
