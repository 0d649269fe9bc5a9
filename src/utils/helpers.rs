//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

/// Telegram rejects messages longer than 4096 UTF-16 code units; replies are cut well below that
pub const MESSAGE_CHUNK_LIMIT: usize = 4000;

/// Length of `text` as Telegram counts it
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Split text into ordered segments of at most `limit` UTF-16 code units
///
/// Boundaries fall on `char` boundaries, so a surrogate pair is never split,
/// and nothing is trimmed or reflowed: concatenating the segments yields the
/// input. A single character wider than `limit` becomes its own segment.
/// Empty input yields no segments.
pub fn chunk_text(text: &str, limit: usize) -> Vec<&str> {
    assert!(limit > 0, "chunk limit must be positive");

    let mut chunks = Vec::with_capacity(utf16_len(text) / limit + 1);
    let mut rest = text;

    while !rest.is_empty() {
        let mut units = 0;
        let mut split_at = rest.len();

        for (idx, ch) in rest.char_indices() {
            let width = ch.len_utf16();
            if units + width > limit {
                split_at = if idx == 0 { ch.len_utf8() } else { idx };
                break;
            }
            units += width;
        }

        let (head, tail) = rest.split_at(split_at);
        chunks.push(head);
        rest = tail;
    }

    chunks
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
