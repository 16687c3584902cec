//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `tinyembed_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tinyembed.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tinyembed";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TINYEMBED";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TINYEMBED_LOG";

// ============================================================================
// RUNTIME CONSTANTS
// ============================================================================

/// Provider backed by deterministic in-process embeddings
pub const PROVIDER_NULL: &str = "null";

/// Provider backed by an Ollama server
pub const PROVIDER_OLLAMA: &str = "ollama";

/// Providers accepted in `runtime.provider`
pub const SUPPORTED_PROVIDERS: [&str; 2] = [PROVIDER_NULL, PROVIDER_OLLAMA];

/// Connection timeout for the runtime HTTP client in seconds
pub const CONNECTION_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// SESSION CONSTANTS
// ============================================================================

/// Default number of search results shown
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
