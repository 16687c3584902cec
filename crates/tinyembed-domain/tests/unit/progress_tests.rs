//! Unit tests for progress events

use tinyembed_domain::{ProgressEvent, ProgressPhase, TransferProgress};

fn downloading(percent: f64, message: Option<&str>) -> ProgressEvent {
    ProgressEvent::Downloading {
        model: "nomic-embed-text".to_string(),
        percent,
        message: message.map(str::to_string),
        files: vec![],
        overall: Some(TransferProgress {
            bytes_loaded: 512,
            bytes_total: 1024,
            speed: 256.0,
            time_remaining: 2.0,
        }),
    }
}

#[test]
fn test_phase_of_each_variant() {
    let model = "m".to_string();
    assert_eq!(ProgressEvent::Queued { model: model.clone() }.phase(), ProgressPhase::Queued);
    assert_eq!(downloading(10.0, None).phase(), ProgressPhase::Downloading);
    assert_eq!(ProgressEvent::Ready { model: model.clone() }.phase(), ProgressPhase::Ready);
    assert_eq!(
        ProgressEvent::Error {
            model: model.clone(),
            message: "boom".to_string()
        }
        .phase(),
        ProgressPhase::Error
    );
    assert_eq!(ProgressEvent::Offloaded { model }.phase(), ProgressPhase::Offloaded);
}

#[test]
fn test_percent_and_message() {
    let ready = ProgressEvent::Ready {
        model: "m".to_string(),
    };
    assert_eq!(ready.percent(), 100.0);
    assert_eq!(ready.message(), "m ready");

    assert_eq!(downloading(42.0, None).percent(), 42.0);
    assert_eq!(downloading(42.0, None).message(), "Loading model...");
    assert_eq!(downloading(42.0, Some("pulling")).message(), "pulling");
}

#[test]
fn test_event_serializes_with_phase_tag() {
    let value = serde_json::to_value(ProgressEvent::Queued {
        model: "m".to_string(),
    })
    .unwrap();
    assert_eq!(value, serde_json::json!({"phase": "queued", "model": "m"}));

    let parsed: ProgressEvent =
        serde_json::from_value(serde_json::json!({"phase": "error", "model": "m", "message": "x"}))
            .unwrap();
    assert_eq!(parsed.phase(), ProgressPhase::Error);
    assert_eq!(parsed.model(), "m");
}
