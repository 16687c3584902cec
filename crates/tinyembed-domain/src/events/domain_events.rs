//! Event Publisher Domain Port
//!
//! Defines the contract for publishing session events without coupling to a
//! specific transport (tokio broadcast, null, ...).

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value_objects::{ModelState, ProgressEvent};

/// Session-wide event types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DomainEvent {
    /// Session model state changed
    ModelStateChanged {
        /// New state
        state: ModelState,
        /// Previous state
        previous: ModelState,
    },
    /// Model loading progress was accepted for display
    ModelProgress(ProgressEvent),
    /// A document was added to the session document set
    DocumentAdded {
        /// Index of the new document
        index: usize,
        /// Size of the document set after the add
        total: usize,
    },
    /// The session document set was emptied
    DocumentsCleared {
        /// Number of documents removed
        removed: usize,
    },
}

/// Domain Port for Publishing Session Events
///
/// # Example
///
/// ```rust,no_run
/// use tinyembed_domain::events::{DomainEvent, EventPublisher};
///
/// async fn notify_cleared(publisher: &dyn EventPublisher, removed: usize) -> tinyembed_domain::Result<()> {
///     publisher.publish(DomainEvent::DocumentsCleared { removed }).await
/// }
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all subscribers
    ///
    /// Success means the event was sent, not that anyone received it.
    async fn publish(&self, event: DomainEvent) -> Result<()>;

    /// Check if there are any active subscribers
    fn has_subscribers(&self) -> bool;
}

/// Shared event publisher
pub type SharedEventPublisher = Arc<dyn EventPublisher>;
