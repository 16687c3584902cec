//! Display formatting helpers
//!
//! | Function | Example |
//! |----------|---------|
//! | [`format_bytes`] | `1536` → `"1.50 KB"` |
//! | [`format_speed`] | `2048.0` → `"2.00 KB/s"` |
//! | [`format_duration`] | `75.2` → `"1m 16s"` |
//! | [`format_vector`] | `[0.1, 0.2]` → `"[0.1,0.2]"` |
//! | [`format_percent`] | `0.8734` → `"87.3%"` |
//! | [`preview_text`] | `("hello world", 5)` → `"hello..."` |

use tinyembed_domain::value_objects::EmbeddingData;

const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Vectors up to this length are shown in full
const FULL_VECTOR_MAX: usize = 10;

/// Values shown at each end of a longer vector
const VECTOR_EDGE: usize = 5;

/// Characters of an encoded payload shown
const ENCODED_PREVIEW_CHARS: usize = 100;

/// Human-readable size in base-1024 units with two decimals
///
/// Sizes beyond the gigabyte range stay in GB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", BYTE_UNITS[unit])
}

/// Transfer rate, `"0 B/s"` when nothing is moving
pub fn format_speed(bytes_per_sec: f64) -> String {
    if bytes_per_sec.is_nan() || bytes_per_sec <= 0.0 {
        return "0 B/s".to_string();
    }
    format!("{}/s", format_bytes(bytes_per_sec.round() as u64))
}

/// Remaining time, empty when unknown or zero
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() || seconds <= 0.0 {
        return String::new();
    }
    if seconds < 60.0 {
        return format!("{}s", seconds.ceil() as u64);
    }
    if seconds < 3600.0 {
        let minutes = (seconds / 60.0).floor() as u64;
        let secs = (seconds % 60.0).ceil() as u64;
        return format!("{minutes}m {secs}s");
    }
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    format!("{hours}h {minutes}m")
}

/// Compact rendering of an embedding
///
/// Short vectors are printed in full, longer ones as their first and last
/// five values. Encoded payloads show their length and a prefix.
pub fn format_vector(data: &EmbeddingData) -> String {
    match data {
        EmbeddingData::Float(values) if values.len() <= FULL_VECTOR_MAX => json_list(values),
        EmbeddingData::Float(values) => {
            let head = json_list(&values[..VECTOR_EDGE]);
            let tail = json_list(&values[values.len() - VECTOR_EDGE..]);
            format!(
                "{}, ..., {}",
                head.trim_end_matches(']'),
                tail.trim_start_matches('[')
            )
        }
        EmbeddingData::Base64(encoded) => {
            let prefix: String = encoded.chars().take(ENCODED_PREVIEW_CHARS).collect();
            format!(
                "Base64 encoded ({} characters):\n{prefix}...",
                encoded.chars().count()
            )
        }
    }
}

fn json_list(values: &[f64]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| format!("{values:?}"))
}

/// Similarity as a percentage with one decimal, clamped to [0, 100]
pub fn format_percent(similarity: f64) -> String {
    let percent = if similarity.is_nan() {
        0.0
    } else {
        (similarity * 100.0).clamp(0.0, 100.0)
    };
    format!("{percent:.1}%")
}

/// Dimension count, `"unknown"` for encoded payloads
pub fn format_dimensions(dimensions: Option<usize>) -> String {
    dimensions.map_or_else(|| "unknown".to_string(), |d| d.to_string())
}

/// First `max_chars` characters of `text`, with `...` when truncated
pub fn preview_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
