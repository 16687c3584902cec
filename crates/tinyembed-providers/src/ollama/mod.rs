//! Ollama Runtime
//!
//! Implements the embedding, model lifecycle and capability ports on top of
//! a local Ollama server.
//!
//! | Port | Endpoint |
//! |------|----------|
//! | `EmbeddingProvider` | `POST /api/embed` |
//! | `ModelLifecycleProvider::load` | `POST /api/pull` (streamed), then `POST /api/embed` with no input |
//! | `ModelLifecycleProvider::unload` | `POST /api/embed` with `keep_alive: 0` |
//! | `CapabilityProbe` | `GET /api/version` |

mod pull;
mod runtime;
mod wire;

pub use pull::PullProgressMapper;
pub use runtime::OllamaRuntime;
pub use wire::{EmbedRequest, EmbedResponse, PullRequest, PullStatus, VersionResponse};
