//! Configuration types module

pub mod app;
pub mod logging;
pub mod runtime;
pub mod session;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use runtime::RuntimeConfig;
pub use session::SessionConfig;
