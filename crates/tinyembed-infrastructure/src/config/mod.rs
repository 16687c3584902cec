//! Application configuration
//!
//! | Type | Section |
//! |------|---------|
//! | [`LoggingConfig`] | `[logging]` |
//! | [`RuntimeConfig`] | `[runtime]` |
//! | [`SessionConfig`] | `[session]` |

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
