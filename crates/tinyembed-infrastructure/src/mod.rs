//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML and environment configuration through figment |
//! | [`di`] | Provider resolution and session bootstrap |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;

// Internal tests module (can access pub(crate) items)
#[cfg(test)]
mod tests;
