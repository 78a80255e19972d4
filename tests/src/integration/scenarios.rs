//! # Offset Source and Consumption Gate Scenarios
//!
//! Drives the store only through the `PartitionStateApi` port, the way an
//! offset source and a consumption gate would.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use partition_state::{
        ConsumerAction, Offsets, PartitionState, PartitionStateApi, PartitionStateManager,
        PartitionSyncError, RecordingNotifier, TopicPartition,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const TOPIC: &str = "orders";

    fn make_store() -> (Arc<dyn PartitionStateApi>, RecordingNotifier) {
        let recorder = RecordingNotifier::new();
        let store: Arc<dyn PartitionStateApi> =
            Arc::new(PartitionStateManager::new(recorder.clone()));
        (store, recorder)
    }

    fn state(store: &Arc<dyn PartitionStateApi>, partition: i32) -> Option<PartitionState> {
        store.snapshot(TOPIC, partition).and_then(|s| s.state)
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_full_lifecycle_through_port() {
        let (store, recorder) = make_store();
        assert!(store.snapshot(TOPIC, 0).is_none());

        store.set_remote_offset(TOPIC, 0, 100).unwrap();
        assert_eq!(
            store.snapshot(TOPIC, 0).unwrap().offsets,
            Offsets::new(None, Some(100))
        );
        assert_eq!(state(&store, 0), Some(PartitionState::Unknown));

        store.set_local_offset(TOPIC, 0, 50).unwrap();
        let change = recorder.last().unwrap();
        assert_eq!(change.previous.state, Some(PartitionState::Unknown));
        assert_eq!(change.updated.state, Some(PartitionState::LocalBehind));
        assert_eq!(change.consumer_action(), ConsumerAction::Resume);

        store.validate_local_message(TOPIC, 0, 60).unwrap();

        store.set_local_offset(TOPIC, 0, 100).unwrap();
        let change = recorder.last().unwrap();
        assert_eq!(change.updated.state, Some(PartitionState::Synchronized));
        assert_eq!(change.consumer_action(), ConsumerAction::Pause);

        let err = store.validate_local_message(TOPIC, 0, 99).unwrap_err();
        assert!(matches!(err, PartitionSyncError::InvalidState { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_gate_holds_uncommitted_messages() {
        let (store, _) = make_store();
        store.set_local_offset(TOPIC, 0, 0).unwrap();
        store.set_remote_offset(TOPIC, 0, 5).unwrap();

        let admitted: Vec<i64> = (0..10)
            .filter(|offset| store.validate_local_message(TOPIC, 0, *offset).is_ok())
            .collect();
        assert_eq!(admitted, vec![0, 1, 2, 3, 4]);

        let err = store.validate_local_message(TOPIC, 0, 5).unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.topic_partition(), &TopicPartition::new(TOPIC, 0));

        // Once the remote commits further, the held message becomes admissible.
        store.set_remote_offset(TOPIC, 0, 8).unwrap();
        store.validate_local_message(TOPIC, 0, 5).unwrap();
    }

    #[test]
    fn test_restart_rewinds_both_sides() {
        let (store, recorder) = make_store();
        store.set_remote_offset(TOPIC, 0, 200).unwrap();
        store.set_local_offset(TOPIC, 0, 200).unwrap();
        assert_eq!(state(&store, 0), Some(PartitionState::Synchronized));

        // Remote consumer restarts from an earlier checkpoint.
        store.set_remote_offset(TOPIC, 0, 150).unwrap();
        assert_eq!(state(&store, 0), Some(PartitionState::RemoteBehind));
        assert_eq!(
            recorder.last().unwrap().consumer_action(),
            ConsumerAction::Pause
        );

        // Local consumer restarts further back still.
        store.set_local_offset(TOPIC, 0, 120).unwrap();
        assert_eq!(state(&store, 0), Some(PartitionState::LocalBehind));
        store.validate_local_message(TOPIC, 0, 149).unwrap();
        assert!(store.validate_local_message(TOPIC, 0, 150).is_err());
    }

    #[test]
    fn test_many_partitions_tracked_independently() {
        let (store, recorder) = make_store();

        for partition in 0..8 {
            store.set_remote_offset(TOPIC, partition, 10).unwrap();
            store
                .set_local_offset(TOPIC, partition, i64::from(partition) * 2)
                .unwrap();
        }

        assert_eq!(store.tracked_partitions().len(), 8);
        for partition in 0..5 {
            assert_eq!(state(&store, partition), Some(PartitionState::LocalBehind));
        }
        assert_eq!(state(&store, 5), Some(PartitionState::Synchronized));
        for partition in 6..8 {
            assert_eq!(state(&store, partition), Some(PartitionState::RemoteBehind));
        }

        // Two notifications per partition: NONE -> UNKNOWN -> known state.
        assert_eq!(recorder.len(), 16);
    }

    #[test]
    fn test_concurrent_sources_across_partitions() {
        let recorder = RecordingNotifier::new();
        let store = Arc::new(PartitionStateManager::new(recorder.clone()));

        std::thread::scope(|scope| {
            for partition in 0..4 {
                let local = Arc::clone(&store);
                scope.spawn(move || {
                    for offset in 0..=300 {
                        local.set_local_offset(TOPIC, partition, offset).unwrap();
                    }
                });
                let remote = Arc::clone(&store);
                scope.spawn(move || {
                    for offset in 0..=300 {
                        remote.set_remote_offset(TOPIC, partition, offset).unwrap();
                    }
                });
            }
        });

        for partition in 0..4 {
            let snapshot = store.snapshot(TOPIC, partition).unwrap();
            assert_eq!(snapshot.offsets, Offsets::new(Some(300), Some(300)));
            assert_eq!(snapshot.state, Some(PartitionState::Synchronized));

            let changes: Vec<_> = recorder
                .changes()
                .into_iter()
                .filter(|c| c.partition() == partition)
                .collect();
            assert_eq!(changes[0].previous.state, None);
            for pair in changes.windows(2) {
                assert_eq!(pair[0].updated.state, pair[1].previous.state);
                assert_ne!(pair[1].previous.state, pair[1].updated.state);
            }
        }
    }
}
