//! Discarding event publisher
//!
//! Sessions built without an observer (tests, one-shot embedding calls)
//! still publish state changes and progress. This publisher accepts them
//! and only keeps a count.
//!
//! ```rust
//! use tinyembed_providers::events::NullEventPublisher;
//!
//! let publisher = NullEventPublisher::new();
//! assert_eq!(publisher.discarded(), 0);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tinyembed_domain::error::Result;
use tinyembed_domain::events::{DomainEvent, EventPublisher};
use tracing::trace;

/// Publisher with no subscribers
#[derive(Debug, Default)]
pub struct NullEventPublisher {
    discarded: AtomicU64,
}

impl NullEventPublisher {
    /// Create a publisher that drops every event
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle, ready to hand to a session
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of events dropped so far
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventPublisher for NullEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<()> {
        trace!(?event, "Session event discarded");
        self.discarded.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
