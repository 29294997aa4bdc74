//! Definition text normalization, truncation, and reply rendering.

use crate::reply::Reply;

/// Display cap for definition text, in characters.
pub const MAX_DEFINITION_CHARS: usize = 1000;

/// Marker appended when a definition is cut.
const ELLIPSIS: &str = "..";

/// Collapse internal whitespace runs (newlines, tabs, repeated spaces)
/// to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Bound `text` to `max_chars` characters for display.
///
/// Texts at or under the limit pass through unchanged. Longer texts
/// are cut so the result, including the `..` marker, stays within the
/// limit: the cut backs up to the last space in the window when one
/// exists, so a word is never split mid-way. Idempotent. Counts
/// characters, not bytes.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    // A cap too small to hold the marker degrades to a hard cut.
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }

    let window = max_chars.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(window).collect();
    if let Some(pos) = cut.rfind(' ') {
        cut.truncate(pos);
    }
    let mut result = cut.trim_end().to_string();
    result.push_str(ELLIPSIS);
    result
}

/// Plaintext body: `word [index]: text (link)`, index omitted on the
/// random path.
pub fn render_plaintext(word: &str, text: &str, link: &str, index: Option<usize>) -> String {
    match index {
        Some(i) => format!("{} [{}]: {} ({})", word, i, text, link),
        None => format!("{}: {} ({})", word, text, link),
    }
}

/// HTML body: same structure with the word in `<strong>` and the
/// permalink as an anchor labelled "link".
pub fn render_html(word: &str, text: &str, link: &str, index: Option<usize>) -> String {
    match index {
        Some(i) => format!(
            "<strong>{}</strong> [{}]: {} (<a href='{}'>link</a>)",
            word, i, text, link
        ),
        None => format!(
            "<strong>{}</strong>: {} (<a href='{}'>link</a>)",
            word, text, link
        ),
    }
}

/// Render both bodies for a selected definition.
pub fn render_reply(word: &str, text: &str, link: &str, index: Option<usize>) -> Reply {
    Reply::notice(
        render_plaintext(word, text, link, index),
        render_html(word, text, link, index),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(normalize_whitespace("a \t b\n\nc"), "a b c");
    }

    #[test]
    fn short_text_passes_through() {
        assert_eq!(truncate("short", 1000), "short");
    }

    #[test]
    fn long_text_ends_with_marker_and_fits() {
        let text = "word ".repeat(300);
        let cut = truncate(&text, 1000);
        assert!(cut.ends_with(".."));
        assert!(cut.chars().count() <= 1000);
        // Cut lands on a word boundary: strip the marker and the rest
        // is a prefix of the input ending in a complete word.
        let body = cut.trim_end_matches('.');
        assert!(text.starts_with(body));
        assert!(!body.ends_with(' '));
    }
}
