//! # Sync Telemetry
//!
//! Ambient observability for processes that embed the partition state store.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` registry with env filter, pretty or JSON output
//! - **Metrics**: Prometheus text rendering of the default registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sync_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//!
//!     // Partition state transitions and anomalies are now logged
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PS_SERVICE_NAME` | `partition-sync` | Service name in startup logs |
//! | `PS_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `PS_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `PS_JSON_LOGS` | `false` | JSON output (defaults to true in containers) |

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};
pub use metrics::{render_metrics, render_registry};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    #[error("Failed to encode metrics: {0}")]
    MetricsEncode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
