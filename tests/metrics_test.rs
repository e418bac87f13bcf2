//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

#![cfg(feature = "server")]

use std::sync::Arc;

use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use tonic::Request;

use alehouse::server::AlehouseService;
use alehouse::server::proto;
use alehouse::server::proto::beer_service_server::BeerService;
use alehouse::{Alehouse, BeerInteractor, telemetry};

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

fn service() -> AlehouseService<BeerInteractor> {
    let catalog = Alehouse::builder().build().unwrap();
    AlehouseService::new(Arc::new(catalog))
}

/// Sum counter values for `name` whose `status` label equals `status`.
fn counter_with_status(snapshot: &SnapshotVec, name: &str, status: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .filter(|(key, _, _, _)| {
            key.key()
                .labels()
                .any(|l| l.key() == "status" && l.value() == status)
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Check if any histogram entries exist for a given metric name.
fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

// ============================================================================
// Tests
// ============================================================================

/// Runs async code within a local recorder scope on the multi-thread runtime.
///
/// `block_in_place` ensures the sync `with_local_recorder` closure stays
/// on the current thread while `block_on` drives the inner async work.
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn successful_request_records_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                service()
                    .create_beer(Request::new(proto::CreateBeerRequest {
                        name: "Pils".to_string(),
                        ..Default::default()
                    }))
                    .await
            })
        })
    });
    assert!(result.is_ok());

    let snapshot = snapshotter.snapshot().into_vec();

    let count = counter_with_status(&snapshot, telemetry::REQUESTS_TOTAL, "ok");
    assert_eq!(count, 1, "expected 1 ok request counter");

    assert!(
        has_histogram(&snapshot, telemetry::REQUEST_DURATION_SECONDS),
        "expected a duration histogram entry"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn rejected_request_records_invalid_argument() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let _result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                service()
                    .list_beers(Request::new(proto::ListBeersRequest { page: 0 }))
                    .await
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();

    let count = counter_with_status(&snapshot, telemetry::REQUESTS_TOTAL, "invalid_argument");
    assert_eq!(count, 1, "expected 1 invalid_argument request counter");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn failed_request_records_internal() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let _result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                service()
                    .get_beer(Request::new(proto::GetBeerRequest {
                        id: "missing".to_string(),
                    }))
                    .await
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();

    let count = counter_with_status(&snapshot, telemetry::REQUESTS_TOTAL, "internal");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn metrics_are_noop_without_recorder() {
    // Verify no panics when no recorder is installed.
    let _response = service()
        .list_beers(Request::new(proto::ListBeersRequest { page: 1 }))
        .await
        .unwrap();
}
