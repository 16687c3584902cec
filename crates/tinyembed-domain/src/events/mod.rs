//! Domain Events
//!
//! | Event | Description |
//! |-------|-------------|
//! | [`DomainEvent`] | Session state, progress and document-set changes |
//! | [`EventPublisher`] | Interface for publishing domain events |

/// Domain event definitions and publisher interface
pub mod domain_events;

pub use domain_events::{DomainEvent, EventPublisher, SharedEventPublisher};
