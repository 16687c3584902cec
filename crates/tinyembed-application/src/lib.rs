//! Application Layer - TinyEmbed
//!
//! Orchestrates the embedding runtime around an explicit session object.
//!
//! ## Architecture
//!
//! The application layer:
//! - Owns the session state machine, document set and result set
//! - Enforces a single in-flight provider request per session
//! - Tracks loading progress and keeps a timestamped activity log
//! - Formats values for display
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `tinyembed-domain`: similarity engine, value objects and ports
//! - Pure Rust libraries for async, serialization, time and logging

pub mod activity_log;
pub mod formatting;
pub mod gate;
pub mod progress;
pub mod results;
pub mod session;
pub mod timing;

pub use activity_log::{ActivityLog, LogEntry};
pub use gate::{RequestGate, RequestPermit};
pub use progress::{ProgressTracker, ProgressView};
pub use results::{BatchEmbeddingResult, SessionResults, SingleEmbeddingResult};
pub use session::{EmbeddingSession, SessionOptions};
pub use timing::TimedOperation;
