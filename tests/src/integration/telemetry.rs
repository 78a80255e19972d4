//! # Telemetry Wiring
//!
//! Logging initialization and metrics exposition around a live store.

#[cfg(test)]
mod tests {
    use partition_state::{
        PartitionStateApi, PartitionStateManager, PartitionSyncConfig, RecordingNotifier,
        TracingNotifier,
    };
    use sync_telemetry::{init_logging, render_metrics, TelemetryConfig, TelemetryError};

    fn init_quiet_logging() {
        let config = TelemetryConfig {
            console_output: false,
            ..Default::default()
        };
        match init_logging(&config) {
            Ok(()) | Err(TelemetryError::LoggerInit(_)) => {}
            Err(other) => panic!("unexpected telemetry error: {other}"),
        }
    }

    #[test]
    fn test_metrics_exposed_after_transitions() {
        init_quiet_logging();

        let store = PartitionStateManager::new(TracingNotifier);
        store.set_remote_offset("metrics", 0, 10).unwrap();
        store.set_local_offset("metrics", 0, 4).unwrap();
        store.set_local_offset("metrics", 0, 2).unwrap();
        assert!(store.validate_local_message("metrics", 0, 20).is_err());

        let rendered = render_metrics().unwrap();
        assert!(rendered.contains("partition_state_transitions_total"));
        assert!(rendered.contains("partition_state_offset_regressions_total"));
        assert!(rendered.contains("partition_state_messages_rejected_total"));
        assert!(rendered.contains("partition_state_tracked_partitions"));
    }

    #[test]
    fn test_strict_rejection_is_counted() {
        init_quiet_logging();

        let config = PartitionSyncConfig {
            reject_remote_regression: true,
            ..Default::default()
        };
        let store = PartitionStateManager::with_config(config, RecordingNotifier::new());
        store.set_remote_offset("strict", 0, 10).unwrap();
        assert!(store.set_remote_offset("strict", 0, 5).is_err());

        let rendered = render_metrics().unwrap();
        assert!(rendered.contains("partition_state_offset_regressions_total"));
    }
}
