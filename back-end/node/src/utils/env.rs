//! Environment variable parsing utilities.
//!
//! Each helper follows the pattern: try env var → parse → fallback to default.

/// Get a u32 from environment, with default fallback.
///
/// Returns `default` if:
/// - Environment variable is not set
/// - Value cannot be parsed as u32
#[inline]
pub fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Get a String from environment, with default fallback.
///
/// Empty values are treated as unset.
#[inline]
pub fn env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
