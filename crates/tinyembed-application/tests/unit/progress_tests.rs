//! Tests for the progress tracker

use std::time::{Duration, Instant};

use tinyembed_application::{ProgressTracker, ProgressView};
use tinyembed_domain::{FileProgress, ProgressEvent, ProgressPhase, TransferProgress};

fn downloading(percent: f64) -> ProgressEvent {
    ProgressEvent::Downloading {
        model: "m".to_string(),
        percent,
        message: None,
        files: vec![],
        overall: None,
    }
}

#[test]
fn test_latest_state_wins_even_when_lower() {
    let mut tracker = ProgressTracker::new(Duration::ZERO);
    let now = Instant::now();
    assert!(tracker.accept_at(downloading(80.0), now));
    assert!(tracker.accept_at(downloading(30.0), now + Duration::from_millis(1)));
    assert_eq!(tracker.latest().map(ProgressEvent::percent), Some(30.0));
}

#[test]
fn test_download_bursts_are_throttled() {
    let mut tracker = ProgressTracker::new(Duration::from_millis(50));
    let start = Instant::now();

    assert!(tracker.accept_at(downloading(10.0), start));
    assert!(!tracker.accept_at(downloading(20.0), start + Duration::from_millis(10)));
    assert!(!tracker.accept_at(downloading(30.0), start + Duration::from_millis(49)));
    assert!(tracker.accept_at(downloading(40.0), start + Duration::from_millis(50)));
    assert_eq!(tracker.latest().map(ProgressEvent::percent), Some(40.0));
}

#[test]
fn test_phase_changes_always_pass() {
    let mut tracker = ProgressTracker::new(Duration::from_secs(60));
    let now = Instant::now();
    tracker.accept_at(downloading(10.0), now);
    assert!(tracker.accept_at(
        ProgressEvent::Ready {
            model: "m".to_string()
        },
        now
    ));
    // First download after another phase is never throttled
    assert!(tracker.accept_at(downloading(5.0), now));
}

#[test]
fn test_offloaded_clears() {
    let mut tracker = ProgressTracker::new(Duration::ZERO);
    tracker.accept(ProgressEvent::Ready {
        model: "m".to_string(),
    });
    assert!(tracker.accept(ProgressEvent::Offloaded {
        model: "m".to_string()
    }));
    assert!(tracker.latest().is_none());
    assert!(tracker.view().is_none());
}

#[test]
fn test_view_formats_transfer() {
    let event = ProgressEvent::Downloading {
        model: "m".to_string(),
        percent: 50.0,
        message: Some("pulling layers".to_string()),
        files: vec![FileProgress {
            id: "a".to_string(),
            name: "model.onnx".to_string(),
            percent: 50.0,
            bytes_loaded: Some(1024),
            bytes_total: Some(2048),
            speed: Some(0.0),
            time_remaining: Some(0.0),
        }],
        overall: Some(TransferProgress {
            bytes_loaded: 1024 * 1024,
            bytes_total: 2 * 1024 * 1024,
            speed: 512.0 * 1024.0,
            time_remaining: 2.0,
        }),
    };

    let view = ProgressView::from_event(&event);

    assert_eq!(view.phase, ProgressPhase::Downloading);
    assert_eq!(view.transferred.as_deref(), Some("1.00 MB / 2.00 MB"));
    assert_eq!(view.speed.as_deref(), Some("512.00 KB/s"));
    assert_eq!(view.remaining.as_deref(), Some("2s"));
    assert_eq!(view.files[0].transferred.as_deref(), Some("1.00 KB / 2.00 KB"));
    assert!(view.files[0].speed.is_none());
    assert!(view.files[0].eta.is_none());
    assert_eq!(
        view.status_line(),
        "pulling layers 50.0% (1.00 MB / 2.00 MB, 512.00 KB/s, 2s)"
    );
}

#[test]
fn test_unknown_remaining_shows_placeholder() {
    let event = ProgressEvent::Downloading {
        model: "m".to_string(),
        percent: 0.0,
        message: None,
        files: vec![],
        overall: Some(TransferProgress::default()),
    };
    let view = ProgressView::from_event(&event);
    assert_eq!(view.remaining.as_deref(), Some("--"));
    assert_eq!(view.speed.as_deref(), Some("0 B/s"));
    assert_eq!(view.message, "Loading model...");
}
