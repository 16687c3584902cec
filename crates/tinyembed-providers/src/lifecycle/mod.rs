//! Model Lifecycle Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullModelLifecycle | Testing | Simulated download with scripted progress |
//! | OllamaRuntime | Local | Pull, warm-up and release through Ollama (see [`crate::ollama`]) |

pub mod null;

pub use null::NullModelLifecycle;
