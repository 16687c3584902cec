//! Capability Probe Implementations
//!
//! | Probe | Description |
//! |-------|-------------|
//! | StaticCapabilityProbe | Returns a configured snapshot |
//! | OllamaRuntime | Reports the Ollama server version (see [`crate::ollama`]) |

pub mod fixed;

pub use fixed::StaticCapabilityProbe;
