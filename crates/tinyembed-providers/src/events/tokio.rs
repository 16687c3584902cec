//! Tokio Broadcast Event Bus
//!
//! Event bus implementation using tokio broadcast channels for in-process
//! event distribution.
//!
//! ## Features
//!
//! - Multiple subscribers
//! - Configurable channel capacity
//! - No persistence (events are ephemeral)
//!
//! ## Example
//!
//! ```ignore
//! use futures::StreamExt;
//! use tinyembed_providers::events::TokioEventBus;
//!
//! let bus = TokioEventBus::new();
//! let mut stream = bus.subscribe_events();
//! bus.publish(DomainEvent::DocumentsCleared { removed: 2 }).await?;
//! let event = stream.next().await;
//! ```

use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use futures::{Stream, stream};
use tinyembed_domain::error::Result;
use tinyembed_domain::events::{DomainEvent, EventPublisher};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::constants::EVENT_BUS_CAPACITY;

/// Stream of domain events delivered to one subscriber
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send>>;

/// Event bus using tokio broadcast channels
///
/// ## Capacity
///
/// When the channel is full, the oldest events are dropped and slow
/// subscribers skip ahead.
#[derive(Clone)]
pub struct TokioEventBus {
    sender: Arc<broadcast::Sender<DomainEvent>>,
    capacity: usize,
}

impl TokioEventBus {
    /// Create a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Subscribe to all events published from now on
    pub fn subscribe_events(&self) -> DomainEventStream {
        let receiver = self.sender.subscribe();

        // Lagged receivers skip the dropped events and keep going
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }
}

impl Default for TokioEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioEventBus")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl EventPublisher for TokioEventBus {
    async fn publish(&self, event: DomainEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => debug!("Published event to {} subscribers", count),
            Err(_) => debug!("Published event but no subscribers"),
        }
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
