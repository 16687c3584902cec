//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from runtime APIs.
//! These are shared utilities, not ports.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tinyembed_domain::error::{Error, Result};

/// Builds the error variant for the port that issued the request
pub type ErrorFactory = fn(String) -> Error;

/// Format an error message for a provider
fn provider_error(make: ErrorFactory, provider: &str, context: &str, details: &str) -> Error {
    make(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by runtime adapters.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status, returning the response for further reading
    ///
    /// Error bodies of the form `{"error": "..."}` are unwrapped so the
    /// runtime's own message is surfaced.
    pub async fn check_status(
        response: Response,
        provider_name: &str,
        make: ErrorFactory,
    ) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let details = Self::error_message(&body);
        let code = status.as_u16();

        Err(match code {
            401 => provider_error(make, provider_name, "authentication failed", &details),
            404 => provider_error(make, provider_name, "not found", &details),
            429 => provider_error(make, provider_name, "rate limit exceeded", &details),
            500..=599 => provider_error(
                make,
                provider_name,
                &format!("server error ({code})"),
                &details,
            ),
            _ => provider_error(
                make,
                provider_name,
                &format!("request failed ({code})"),
                &details,
            ),
        })
    }

    /// Check response status and parse the JSON body
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        make: ErrorFactory,
    ) -> Result<T> {
        let response = Self::check_status(response, provider_name, make).await?;
        response.json::<T>().await.map_err(|e| {
            provider_error(make, provider_name, "response parse failed", &e.to_string())
        })
    }

    /// Extract the runtime message from an error body
    pub fn error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("error")?.as_str().map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string())
    }
}
