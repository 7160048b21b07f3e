//! Match records produced by extraction mode, plus the line-number helper.

use log::debug;
use memchr::{memchr_iter, memmem};
use serde::{Deserialize, Serialize};

/// Longest match text echoed verbatim into debug logs.
const LOG_PREVIEW_CHARS: usize = 40;

/// One match found in extraction mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub rule_name: String,
    /// 1-based line of the first occurrence of `text` in the input.
    pub line: usize,
    /// The matched text; invalid UTF-8 is shown as U+FFFD.
    pub text: String,
}

/// Returns the 1-based line on which `needle` first occurs in `haystack`.
///
/// Known limitation: this looks up the first textual occurrence of the matched
/// substring, not the offset of the match itself. When the same substring
/// appears several times, every occurrence reports the line of the first one.
pub fn line_of_first_occurrence(haystack: &[u8], needle: &[u8]) -> usize {
    match memmem::find(haystack, needle) {
        Some(index) => memchr_iter(b'\n', &haystack[..index]).count() + 1,
        None => 1,
    }
}

/// Shortens match text for log output.
pub fn log_preview(text: &str) -> String {
    if text.chars().count() <= LOG_PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{}... ({} chars)", head, text.chars().count())
    }
}

pub fn log_match_debug(module_path: &str, record: &MatchRecord) {
    debug!(
        "{} Found match: Rule='{}', Line={}, Text='{}'",
        module_path,
        record.rule_name,
        record.line,
        log_preview(&record.text)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_of_first_occurrence() {
        let text = b"alpha\nbeta\ngamma";
        assert_eq!(line_of_first_occurrence(text, b"alpha"), 1);
        assert_eq!(line_of_first_occurrence(text, b"gamma"), 3);
    }

    #[test]
    fn test_repeated_substring_reports_first_line() {
        let text = b"foo\nbar\nfoo";
        assert_eq!(line_of_first_occurrence(text, b"foo"), 1);
    }

    #[test]
    fn test_multiline_match_counts_preceding_newlines_only() {
        let text = b"one\n<p>\nbody\n</p>";
        assert_eq!(line_of_first_occurrence(text, b"<p>\nbody\n</p>"), 2);
    }

    #[test]
    fn test_log_preview_truncates_long_text() {
        assert_eq!(log_preview("short"), "short");
        let long = "x".repeat(100);
        assert_eq!(log_preview(&long), format!("{}... (100 chars)", "x".repeat(40)));
    }
}
