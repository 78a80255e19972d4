//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound `StateChangeNotifier` port.

mod channel;
mod logging;
mod recording;

pub use channel::ChannelNotifier;
pub use logging::TracingNotifier;
pub use recording::RecordingNotifier;
