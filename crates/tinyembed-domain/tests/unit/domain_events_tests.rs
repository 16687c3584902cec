//! Unit tests for domain events

use std::sync::Mutex;

use async_trait::async_trait;
use tinyembed_domain::events::{DomainEvent, EventPublisher};
use tinyembed_domain::{EncodingFormat, ModelState};

struct RecordingPublisher {
    published_events: Mutex<Vec<DomainEvent>>,
}

impl RecordingPublisher {
    fn new() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
        }
    }

    fn events(&self) -> Vec<DomainEvent> {
        self.published_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: DomainEvent) -> tinyembed_domain::Result<()> {
        self.published_events.lock().unwrap().push(event);
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        true
    }
}

#[tokio::test]
async fn test_publish_state_change() {
    let publisher = RecordingPublisher::new();
    let event = DomainEvent::ModelStateChanged {
        state: ModelState::Ready {
            model: "m".to_string(),
            format: EncodingFormat::Float,
        },
        previous: ModelState::Loading {
            model: "m".to_string(),
        },
    };

    publisher.publish(event.clone()).await.unwrap();

    assert!(publisher.has_subscribers());
    assert_eq!(publisher.events(), vec![event]);
}

#[test]
fn test_event_serialization_roundtrip() {
    let event = DomainEvent::DocumentAdded { index: 2, total: 3 };
    let json = serde_json::to_string(&event).unwrap();
    let parsed: DomainEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, event);
}
