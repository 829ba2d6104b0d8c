//! String utilities for the domain layer.

/// Keep at most `max_chars` characters, appending `...` when anything was cut.
///
/// Counts characters rather than bytes so the cut never lands inside a
/// multi-byte sequence.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", &s[..end]),
    }
}

/// Keep at most `max_chars` characters without any suffix.
pub fn prefix_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((end, _)) => &s[..end],
    }
}
