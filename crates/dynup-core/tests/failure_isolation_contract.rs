//! Contract test: failure isolation
//!
//! A failure anywhere in the cycle aborts that cycle only. Later stages
//! must not run after an earlier stage failed, and the polling loop must
//! keep scheduling fresh cycles no matter how many in a row fail.

mod common;

use std::net::Ipv4Addr;

use common::*;
use dynup_core::{CycleOutcome, UpdateCycle};

#[tokio::test]
async fn discovery_failure_aborts_before_resolution() {
    let resolver = MockResolver::new([Ipv4Addr::new(198, 51, 100, 7)]);
    let updater = MockUpdater::new();

    let cycle = UpdateCycle::new(
        Box::new(MockIpSource::failing()),
        Box::new(MockResolver::sharing_counters_with(&resolver)),
        Box::new(MockUpdater::sharing_counters_with(&updater)),
        minimal_config("home.example.com"),
    )
    .expect("cycle construction succeeds");

    let outcome = cycle.run_once().await;
    assert!(matches!(outcome, CycleOutcome::DiscoveryFailed(_)));

    assert_eq!(resolver.call_count(), 0, "no lookup after failed discovery");
    assert_eq!(updater.push_count(), 0, "no push after failed discovery");
}

#[tokio::test]
async fn resolution_failure_aborts_before_update() {
    let updater = MockUpdater::new();

    let cycle = UpdateCycle::new(
        Box::new(MockIpSource::new(Ipv4Addr::new(198, 51, 100, 9))),
        Box::new(MockResolver::failing()),
        Box::new(MockUpdater::sharing_counters_with(&updater)),
        minimal_config("home.example.com"),
    )
    .expect("cycle construction succeeds");

    let outcome = cycle.run_once().await;
    assert!(matches!(outcome, CycleOutcome::ResolutionFailed(_)));

    assert_eq!(updater.push_count(), 0, "no push after failed resolution");
}

#[tokio::test]
async fn rejected_update_is_reported_not_propagated() {
    let updater = MockUpdater::failing();

    let cycle = UpdateCycle::new(
        Box::new(MockIpSource::new(Ipv4Addr::new(198, 51, 100, 9))),
        Box::new(MockResolver::new([Ipv4Addr::new(198, 51, 100, 7)])),
        Box::new(MockUpdater::sharing_counters_with(&updater)),
        minimal_config("home.example.com"),
    )
    .expect("cycle construction succeeds");

    let outcome = cycle.run_once().await;
    assert!(matches!(outcome, CycleOutcome::UpdateFailed(_)));
    assert_eq!(updater.push_count(), 1, "one attempt, no intra-cycle retry");
}

#[tokio::test]
async fn loop_survives_repeated_failures() {
    // Every single cycle fails at discovery; the loop must keep running
    // until told to stop, and shut down cleanly when told.
    let source = MockIpSource::failing();

    let cycle = UpdateCycle::new(
        Box::new(MockIpSource::sharing_counters_with(&source)),
        Box::new(MockResolver::failing()),
        Box::new(MockUpdater::failing()),
        minimal_config("home.example.com"),
    )
    .expect("cycle construction succeeds");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let handle = tokio::spawn(async move { cycle.run_with_shutdown(Some(shutdown_rx)).await });

    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    shutdown_tx.send(()).unwrap();
    handle
        .await
        .expect("loop task must not panic")
        .expect("loop must exit cleanly despite failing cycles");

    assert!(source.call_count() >= 1, "at least the startup cycle ran");
}
