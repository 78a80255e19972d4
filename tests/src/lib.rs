//! # Partition Sync Test Suite
//!
//! Unified test crate for flows that span more than one crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs      # Offset source + consumption gate against the public API
//!     ├── shadow_replay.rs  # Channel-driven pause/resume of a simulated local consumer
//!     └── telemetry.rs      # Logging setup and metrics rendering
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ps-tests
//! cargo test -p ps-tests integration::shadow_replay
//! ```

pub mod integration;
