//! Shared helper functions for CLI commands

/// Truncate a string to max_chars characters, adding "..." if truncated.
///
/// Counts characters, not bytes; the log text is Korean and a byte cut
/// could land inside a code point.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
