//! Event application: ordering, decode failures, severity overrides, and
//! the change hook.

use std::sync::Arc;
use std::time::Duration;

use logtune_core::{
    Component, LogLevel, LogRegistry, ProfileEvent, RegisterOptions, Registration,
};
use tests::async_helpers::DEFAULT_TIMEOUT;
use tests::mocks::ScriptedProfileStore;
use tests::{fixtures, gauge};

fn agent() -> Component {
    Component::new("fleet", "agent")
}

async fn registered(store: &Arc<ScriptedProfileStore>) -> Arc<LogRegistry> {
    Registration::new()
        .register(RegisterOptions::new(agent()), store.clone())
        .await
        .unwrap()
}

fn assignment(level: LogLevel) -> Vec<u8> {
    fixtures::payload(&fixtures::profile(&[("fleet", "agent", level)]))
}

#[tokio::test]
async fn added_event_updates_the_gauge() {
    let store = Arc::new(ScriptedProfileStore::new());
    let registry = registered(&store).await;
    let g = registry.gauge();

    store
        .feed(ProfileEvent::Added(assignment(LogLevel::Debug)))
        .await;

    assert!(gauge::wait_for_threshold(&g, 5, DEFAULT_TIMEOUT).await);
    registry.shutdown().await;
}

#[tokio::test]
async fn updates_follow_in_arrival_order() {
    let store = Arc::new(ScriptedProfileStore::new());
    let registry = registered(&store).await;
    let g = registry.gauge();

    store
        .feed(ProfileEvent::Added(assignment(LogLevel::Debug)))
        .await;
    assert!(gauge::wait_for_threshold(&g, 5, DEFAULT_TIMEOUT).await);

    store
        .feed(ProfileEvent::Updated(assignment(LogLevel::Verbose)))
        .await;
    assert!(gauge::wait_for_threshold(&g, 10, DEFAULT_TIMEOUT).await);

    store
        .feed(ProfileEvent::Updated(assignment(LogLevel::Info)))
        .await;
    assert!(gauge::wait_for_threshold(&g, 0, DEFAULT_TIMEOUT).await);

    registry.shutdown().await;
}

#[tokio::test]
async fn delete_applies_fallback() {
    let store = Arc::new(ScriptedProfileStore::new());
    let registry = registered(&store).await;
    let g = registry.gauge();

    store
        .feed(ProfileEvent::Added(assignment(LogLevel::Verbose)))
        .await;
    assert!(gauge::wait_for_threshold(&g, 10, DEFAULT_TIMEOUT).await);

    store.feed(ProfileEvent::Deleted).await;
    assert!(gauge::wait_for_threshold(&g, 0, DEFAULT_TIMEOUT).await);

    registry.shutdown().await;
}

#[tokio::test]
async fn malformed_payload_is_skipped_not_fatal() {
    let store = Arc::new(ScriptedProfileStore::new());
    let registry = registered(&store).await;
    let g = registry.gauge();

    store
        .feed(ProfileEvent::Added(b"{ definitely not json".to_vec()))
        .await;
    // The subscription must survive and apply the next good payload.
    store
        .feed(ProfileEvent::Updated(assignment(LogLevel::Verbose)))
        .await;

    assert!(gauge::wait_for_threshold(&g, 10, DEFAULT_TIMEOUT).await);
    registry.shutdown().await;
}

#[tokio::test]
async fn unrelated_assignments_leave_gauge_at_fallback() {
    let store = Arc::new(ScriptedProfileStore::new());
    let registry = registered(&store).await;
    let g = registry.gauge();

    let other = fixtures::profile(&[("fleet", "controller", LogLevel::Verbose)]);
    store
        .feed(ProfileEvent::Added(fixtures::payload(&other)))
        .await;

    gauge::assert_stays_at(&g, 0, Duration::from_millis(200)).await;
    registry.shutdown().await;
}

#[tokio::test]
async fn severity_override_applies_on_next_event() {
    let store = Arc::new(ScriptedProfileStore::new());
    let registry = registered(&store).await;
    let g = registry.gauge();

    store
        .feed(ProfileEvent::Added(assignment(LogLevel::Debug)))
        .await;
    assert!(gauge::wait_for_threshold(&g, 5, DEFAULT_TIMEOUT).await);

    // Overrides do not recompute the gauge eagerly.
    registry.set_debug_verbosity(7);
    assert_eq!(registry.verbosity(), 5);

    store
        .feed(ProfileEvent::Updated(assignment(LogLevel::Debug)))
        .await;
    assert!(gauge::wait_for_threshold(&g, 7, DEFAULT_TIMEOUT).await);

    registry.shutdown().await;
}

#[tokio::test]
async fn fallback_override_applies_on_delete() {
    let store = Arc::new(ScriptedProfileStore::new());
    let registry = registered(&store).await;
    let g = registry.gauge();

    store
        .feed(ProfileEvent::Added(assignment(LogLevel::Debug)))
        .await;
    assert!(gauge::wait_for_threshold(&g, 5, DEFAULT_TIMEOUT).await);

    registry.set_fallback_verbosity(2);
    store.feed(ProfileEvent::Deleted).await;
    assert!(gauge::wait_for_threshold(&g, 2, DEFAULT_TIMEOUT).await);

    registry.shutdown().await;
}

#[tokio::test]
async fn change_hook_sees_each_transition() {
    let store = Arc::new(ScriptedProfileStore::new());
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = seen.clone();

    let registry = Registration::new()
        .register(
            RegisterOptions::new(agent())
                .with_change_hook(move |threshold| sink.lock().push(threshold)),
            store.clone(),
        )
        .await
        .unwrap();
    let g = registry.gauge();

    store
        .feed(ProfileEvent::Added(assignment(LogLevel::Debug)))
        .await;
    assert!(gauge::wait_for_threshold(&g, 5, DEFAULT_TIMEOUT).await);

    store.feed(ProfileEvent::Deleted).await;
    assert!(gauge::wait_for_threshold(&g, 0, DEFAULT_TIMEOUT).await);

    assert_eq!(*seen.lock(), vec![5, 0]);
    registry.shutdown().await;
}
