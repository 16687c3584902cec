//! Domain layer constants

// ============================================================================
// SIMILARITY CONSTANTS
// ============================================================================

/// Tolerance used when comparing similarity scores for equality
pub const SIMILARITY_EPSILON: f64 = 1e-9;

// ============================================================================
// SESSION CONSTANTS
// ============================================================================

/// Characters of text shown in embedding log lines
pub const LOG_PREVIEW_EMBED_CHARS: usize = 50;

/// Characters of text shown when a document is added
pub const LOG_PREVIEW_DOCUMENT_CHARS: usize = 40;

/// Characters of text shown in document and result listings
pub const LISTING_PREVIEW_CHARS: usize = 60;

/// Default minimum interval between displayed download notifications
pub const PROGRESS_THROTTLE_MS: u64 = 50;

/// Default number of retained activity log entries
pub const ACTIVITY_LOG_CAPACITY: usize = 500;
