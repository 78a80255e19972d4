//! Prometheus text exposition.
//!
//! Metrics themselves are defined by the crates that record them (for example
//! `partition-state` with its `metrics` feature) and registered in the
//! prometheus default registry. This module only renders them.

use prometheus::{Encoder, Registry, TextEncoder};

use crate::TelemetryError;

/// Encode every metric in the default registry as Prometheus text format.
pub fn render_metrics() -> Result<String, TelemetryError> {
    encode_families(&prometheus::gather())
}

/// Encode every metric in a specific registry as Prometheus text format.
pub fn render_registry(registry: &Registry) -> Result<String, TelemetryError> {
    encode_families(&registry.gather())
}

fn encode_families(
    metric_families: &[prometheus::proto::MetricFamily],
) -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsEncode(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsEncode(e.to_string()))
}
