//! Overlapping requests: stale summaries, date switches, and polling.

use std::time::Duration;

use chrono::NaiveDate;
use naplog_client::testing::{FakeBackend, Reply};
use naplog_tracker::{SummaryFetch, Tracker};
use serde_json::json;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn summary_for(date: &str, naps: usize) -> serde_json::Value {
    let naps = (0..naps)
        .map(|i| json!({ "id": i, "start": "09:00", "end": "10:00", "duration": "1:00:00" }))
        .collect::<Vec<_>>();
    json!({
        "date": date,
        "naps": naps,
        "total_sleep_hours": format!("{:.2}", naps.len() as f64),
        "total_sleep_duration": format!("{}:00:00", naps.len()),
    })
}

#[tokio::test]
async fn late_response_for_previous_date_is_discarded() {
    let backend = FakeBackend::start();
    backend.reply("GET", "/active", Reply::ok(json!({ "active_session": null })));
    backend.reply(
        "GET",
        "/summary?date=2024-01-05",
        Reply::ok(summary_for("2024-01-05", 3)).delayed(Duration::from_millis(600)),
    );
    backend.reply("GET", "/summary?date=2024-01-06", Reply::ok(summary_for("2024-01-06", 1)));
    let tracker = Tracker::with_date(backend.client(), day(5));

    let first = tracker.clone();
    let slow = tokio::spawn(async move { first.fetch_summary(day(5)).await });
    tokio::time::sleep(Duration::from_millis(100)).await;
    tracker.select_date(day(6)).await;
    assert_eq!(slow.await.unwrap(), SummaryFetch::Stale);

    let state = tracker.snapshot();
    assert_eq!(state.selected_date, day(6));
    let summary = state.summary.as_ref().expect("summary applied");
    assert_eq!(summary.date, Some(day(6)));
    assert_eq!(summary.naps.len(), 1);
    assert!(!state.loading());
}

#[tokio::test]
async fn older_request_for_same_date_cannot_overwrite_newer() {
    let backend = FakeBackend::start();
    backend.reply(
        "GET",
        "/summary",
        Reply::ok(summary_for("2024-01-05", 2)).delayed(Duration::from_millis(500)),
    );
    backend.reply("GET", "/summary", Reply::ok(summary_for("2024-01-05", 4)));
    let tracker = Tracker::with_date(backend.client(), day(5));

    let older = tracker.clone();
    let older = tokio::spawn(async move { older.fetch_summary(day(5)).await });
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(tracker.snapshot().loading());

    assert_eq!(tracker.fetch_summary(day(5)).await, SummaryFetch::Applied);
    assert!(tracker.snapshot().loading(), "older request still in flight");
    assert_eq!(older.await.unwrap(), SummaryFetch::Stale);

    let state = tracker.snapshot();
    assert_eq!(state.summary.as_ref().expect("summary").naps.len(), 4);
    assert!(!state.loading());
}

#[tokio::test]
async fn older_failure_for_same_date_does_not_raise_banner() {
    let backend = FakeBackend::start();
    backend.reply(
        "GET",
        "/summary",
        Reply::raw(500, "boom").delayed(Duration::from_millis(500)),
    );
    backend.reply("GET", "/summary", Reply::ok(summary_for("2024-01-05", 2)));
    let tracker = Tracker::with_date(backend.client(), day(5));

    let older = tracker.clone();
    let older = tokio::spawn(async move { older.fetch_summary(day(5)).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(tracker.fetch_summary(day(5)).await, SummaryFetch::Applied);
    assert_eq!(older.await.unwrap(), SummaryFetch::Stale);

    let state = tracker.snapshot();
    assert!(state.error.is_none());
    assert_eq!(state.summary.as_ref().expect("newer summary kept").naps.len(), 2);
    assert!(!state.loading());
}

#[tokio::test]
async fn failure_for_previous_date_does_not_raise_banner() {
    let backend = FakeBackend::start();
    backend.reply(
        "GET",
        "/summary?date=2024-01-05",
        Reply::raw(500, "boom").delayed(Duration::from_millis(400)),
    );
    backend.reply("GET", "/summary?date=2024-01-06", Reply::ok(summary_for("2024-01-06", 0)));
    backend.reply("GET", "/active", Reply::ok(json!({ "active_session": null })));
    let tracker = Tracker::with_date(backend.client(), day(5));

    let first = tracker.clone();
    let slow = tokio::spawn(async move { first.fetch_summary(day(5)).await });
    tokio::time::sleep(Duration::from_millis(100)).await;
    tracker.select_date(day(6)).await;

    assert_eq!(slow.await.unwrap(), SummaryFetch::Stale);
    assert!(tracker.snapshot().error.is_none());
}

#[tokio::test]
async fn refresh_loads_session_and_summary() {
    let backend = FakeBackend::start();
    backend.reply(
        "GET",
        "/active",
        Reply::ok(json!({ "active_session": { "id": 8, "start_time": "10:05 PM" } })),
    );
    backend.reply("GET", "/summary?date=2024-01-05", Reply::ok(summary_for("2024-01-05", 2)));
    let tracker = Tracker::with_date(backend.client(), day(5));
    let changes = tracker.subscribe();

    tracker.refresh().await;

    assert!(changes.has_changed().unwrap());
    let view = tracker.view();
    assert!(view.sleeping);
    assert_eq!(view.summary.expect("summary").naps.len(), 2);
}

#[tokio::test]
async fn poll_picks_up_session_started_elsewhere() {
    let backend = FakeBackend::start();
    backend.reply("GET", "/active", Reply::ok(json!({ "active_session": null })));
    backend.reply(
        "GET",
        "/active",
        Reply::ok(json!({ "active_session": { "id": 2, "start_time": "03:00 AM" } })),
    );
    let tracker = Tracker::with_date(backend.client(), day(5));

    let poll = tracker.spawn_active_poll(Duration::from_millis(100));
    tokio::time::sleep(Duration::from_millis(450)).await;

    assert!(poll.is_running());
    assert!(backend.count("GET", "/active") >= 2);
    assert!(tracker.view().end_enabled);

    poll.stop();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let after_stop = backend.count("GET", "/active");
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(backend.count("GET", "/active"), after_stop);
}
