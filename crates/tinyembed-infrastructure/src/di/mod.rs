//! Composition root
//!
//! ```text
//! AppConfig → resolve_runtime → RuntimeProviders ─┐
//!                                TokioEventBus ────┼→ EmbeddingSession → AppContext
//!                     SessionConfig options ───────┘
//! ```

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{AppContext, init_app, init_app_with_providers};
pub use resolver::{RuntimeProviders, resolve_runtime};
