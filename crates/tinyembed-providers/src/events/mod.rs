//! Event Publisher Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullEventPublisher | Testing | Discards all events |
//! | TokioEventBus | In-Process | Tokio broadcast channels |

pub mod null;
pub mod tokio;

pub use null::NullEventPublisher;
pub use self::tokio::{DomainEventStream, TokioEventBus};

// Re-export domain event types
pub use tinyembed_domain::events::{DomainEvent, EventPublisher};
