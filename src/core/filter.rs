// ghost-telemetry - core/filter.rs
//
// Tag filter for raw log text.
// Core layer: pure logic, no I/O.

use crate::util::constants::GHOST_TAG;
use std::borrow::Cow;

/// Convert `\r\n` and lone `\r` line breaks to `\n`.
///
/// Borrows when the text has no carriage returns.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Split already-normalised text into lines on `\n`.
///
/// A final newline terminates the last line rather than starting an empty
/// one, and empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.strip_suffix('\n').unwrap_or(text).split('\n').collect()
}

/// Literal substring filter. Case-sensitive, no pattern syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    tag: String,
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::new(GHOST_TAG)
    }
}

impl TagFilter {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns true if `line` contains the tag anywhere.
    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.tag.as_str())
    }

    /// Keep the lines of `text` that contain the tag, in source order.
    ///
    /// `\r\n`, `\r` and `\n` all end a line; no `\r` reaches the result.
    pub fn apply(&self, text: &str) -> Vec<String> {
        let text = normalize_newlines(text);
        split_lines(&text)
            .into_iter()
            .filter(|line| self.matches(line))
            .map(str::to_owned)
            .collect()
    }
}

/// Filter `text` with the default `[GHOST]` tag.
pub fn ghost_lines(text: &str) -> Vec<String> {
    TagFilter::default().apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_tagged_lines_in_order() {
        let text = "foo\n[GHOST] cpu=idle\nbar\n[GHOST] mem=ok\n";
        assert_eq!(ghost_lines(text), vec!["[GHOST] cpu=idle", "[GHOST] mem=ok"]);
    }

    #[test]
    fn test_tag_may_appear_mid_line() {
        let text = "[  12.345678] [GHOST] Universal i18n Layer: Ready to Serve\n";
        assert_eq!(
            ghost_lines(text),
            vec!["[  12.345678] [GHOST] Universal i18n Layer: Ready to Serve"]
        );
    }

    #[test]
    fn test_similar_tags_do_not_match() {
        let text = "[GHOST Stats] Total: 5 | Translated: 2\n[ghost] lower\nGHOST bare\n";
        assert!(ghost_lines(text).is_empty());
    }

    #[test]
    fn test_no_matches_is_empty() {
        assert!(ghost_lines("usb 1-1: new device\n").is_empty());
        assert!(ghost_lines("").is_empty());
    }

    #[test]
    fn test_duplicate_lines_are_all_kept() {
        let text = "[GHOST] tick\n[GHOST] tick\n";
        assert_eq!(ghost_lines(text).len(), 2);
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        assert_eq!(ghost_lines("[GHOST] crlf\r\nother\r\n"), vec!["[GHOST] crlf"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        assert_eq!(
            ghost_lines("[GHOST] a\r[GHOST] b\rc"),
            vec!["[GHOST] a", "[GHOST] b"]
        );
    }

    #[test]
    fn test_normalize_newlines() {
        assert!(matches!(normalize_newlines("a\nb\n"), Cow::Borrowed("a\nb\n")));
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        // \r\r\n is one bare break followed by one CRLF break.
        assert_eq!(normalize_newlines("a\r\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_custom_tag() {
        let filter = TagFilter::new("[TRACE]");
        assert_eq!(filter.tag(), "[TRACE]");
        assert_eq!(filter.apply("a\n[TRACE] b\n[GHOST] c"), vec!["[TRACE] b"]);
    }
}
