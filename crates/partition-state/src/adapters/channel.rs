//! Channel Notifier Adapter
//!
//! Forwards state changes into a tokio channel so the code that pauses and
//! resumes the local consumer can run on its own task.

use crate::domain::entities::StateChange;
use crate::ports::outbound::StateChangeNotifier;
use tokio::sync::mpsc;
use tracing::debug;

/// Notifier backed by an unbounded mpsc sender.
///
/// Sending never blocks, so the updating thread is not held up by a slow
/// receiver.
#[derive(Clone, Debug)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<StateChange>,
}

impl ChannelNotifier {
    /// Create a notifier together with the receiving end.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StateChange>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wrap an existing sender.
    pub fn from_sender(sender: mpsc::UnboundedSender<StateChange>) -> Self {
        Self { sender }
    }

    /// Whether the receiving end has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl StateChangeNotifier for ChannelNotifier {
    fn on_state_change(&self, change: &StateChange) {
        if let Err(err) = self.sender.send(change.clone()) {
            debug!(
                topic_partition = %err.0.topic_partition,
                "State change receiver dropped, discarding notification"
            );
        }
    }
}
