//! Ports module for partition state tracking
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::PartitionStateApi;
pub use outbound::{NoopNotifier, StateChangeNotifier};
