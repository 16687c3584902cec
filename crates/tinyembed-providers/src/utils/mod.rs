//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

pub(crate) mod http_response;

pub use http_response::HttpResponseUtils;
