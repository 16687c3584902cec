//! Tests for event publishers

use futures::StreamExt;
use tinyembed_providers::events::{DomainEvent, EventPublisher, NullEventPublisher, TokioEventBus};

#[tokio::test]
async fn test_tokio_bus_delivers_to_all_subscribers() {
    let bus = TokioEventBus::new();
    let mut first = bus.subscribe_events();
    let mut second = bus.subscribe_events();
    assert_eq!(bus.subscriber_count(), 2);
    assert!(bus.has_subscribers());

    let event = DomainEvent::DocumentAdded { index: 0, total: 1 };
    bus.publish(event.clone()).await.unwrap();

    assert_eq!(first.next().await, Some(event.clone()));
    assert_eq!(second.next().await, Some(event));
}

#[tokio::test]
async fn test_tokio_bus_publish_without_subscribers_succeeds() {
    let bus = TokioEventBus::with_capacity(4);
    assert!(!bus.has_subscribers());
    bus.publish(DomainEvent::DocumentsCleared { removed: 0 })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_lagged_subscriber_skips_ahead() {
    let bus = TokioEventBus::with_capacity(2);
    let mut stream = bus.subscribe_events();
    for index in 0..5 {
        bus.publish(DomainEvent::DocumentAdded { index, total: index + 1 })
            .await
            .unwrap();
    }

    assert_eq!(
        stream.next().await,
        Some(DomainEvent::DocumentAdded { index: 3, total: 4 })
    );
}

#[tokio::test]
async fn test_null_publisher_discards() {
    let publisher = NullEventPublisher::new();
    publisher
        .publish(DomainEvent::DocumentsCleared { removed: 3 })
        .await
        .unwrap();
    publisher
        .publish(DomainEvent::DocumentAdded { index: 0, total: 1 })
        .await
        .unwrap();
    assert!(!publisher.has_subscribers());
    assert_eq!(publisher.discarded(), 2);
}
