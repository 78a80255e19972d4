//! Cross-crate integration flows.

mod scenarios;
mod telemetry;
