//! Degradation tracking, metrics and tracing setup.

use career_core::config::ObservabilityConfig;
use career_core::models::{DegradationEvent, QueryIntent, RetrievalStatus};
use career_observability::tracing_setup;
use career_observability::{DegradationTracker, MetricsCollector, RecoveryStatus};

#[test]
fn degradation_recorded_then_recovered() {
    let mut tracker = DegradationTracker::new();
    tracker.record(DegradationEvent::new(
        "documents",
        "documents adapter unavailable: down",
        "graph facts only",
    ));
    tracker.record(DegradationEvent::new("graph", "timeout", "passages only"));
    assert!(tracker.is_degraded("documents"));
    assert_eq!(tracker.active_degradations().len(), 2);

    assert_eq!(tracker.mark_recovered("documents"), 1);
    assert!(!tracker.is_degraded("documents"));
    assert!(tracker.is_degraded("graph"));
    let documents = tracker.events().next().unwrap();
    assert_eq!(documents.recovery_status, RecoveryStatus::Recovered);
    assert!(documents.recovered_at.is_some());
    assert_eq!(tracker.count_recent("graph", 60), 1);
}

#[test]
fn tracker_drops_oldest_beyond_capacity() {
    let mut tracker = DegradationTracker::with_capacity(2);
    for i in 0..3 {
        tracker.record(DegradationEvent::new(format!("c{i}"), "f", "fb"));
    }
    let components: Vec<&str> = tracker
        .events()
        .map(|t| t.event.component.as_str())
        .collect();
    assert_eq!(components, vec!["c1", "c2"]);
}

#[test]
fn full_tracker_keeps_the_newest_events_in_order() {
    let mut tracker = DegradationTracker::with_capacity(3);
    for i in 0..10 {
        tracker.record(DegradationEvent::new(format!("c{i}"), "f", "fb"));
    }
    let components: Vec<&str> = tracker
        .events()
        .map(|t| t.event.component.as_str())
        .collect();
    assert_eq!(components, vec!["c7", "c8", "c9"]);

    assert_eq!(tracker.mark_recovered("c8"), 1);
    tracker.record(DegradationEvent::new("c10", "f", "fb"));
    let active: Vec<&str> = tracker
        .active_degradations()
        .into_iter()
        .map(|t| t.event.component.as_str())
        .collect();
    assert_eq!(active, vec!["c9", "c10"]);
}

#[test]
fn metrics_snapshot_serializes() {
    let mut metrics = MetricsCollector::new();
    metrics
        .retrieval
        .record_answer(QueryIntent::TransitionPath, RetrievalStatus::Ok, true, 120, 1500);
    metrics.cache.record_build();
    metrics.cache.record_hit();
    metrics.cache.record_corrupted();

    let json = metrics.to_json().unwrap();
    assert_eq!(json["retrieval"]["queries_by_intent"]["TRANSITION_PATH"], 1);
    assert_eq!(json["cache"]["hits"], 1);
    assert_eq!(metrics.cache.invalidations(), 1);
    assert!((metrics.cache.hit_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn init_tracing_is_idempotent() {
    let config = ObservabilityConfig::default();
    let _ = tracing_setup::init_tracing(&config);
    // A second install is refused rather than panicking.
    assert!(!tracing_setup::init_tracing(&config));
}
