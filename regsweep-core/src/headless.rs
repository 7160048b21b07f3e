// regsweep-core/src/headless.rs

//! Convenience wrappers for one-shot, non-interactive use of the engine.

use crate::config::PatternConfig;
use crate::engine::PatternEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::pattern_match::MatchRecord;
use crate::report::ReplacementOutcome;

/// Applies every rule of `config` to `content` and returns the final text.
///
/// Without a configuration this is the identity function.
pub fn headless_replace_string(config: Option<PatternConfig>, content: &str) -> String {
    headless_replace(config, content.as_bytes())
        .text_lossy()
        .into_owned()
}

/// Like [`headless_replace_string`] but works on raw bytes and keeps the
/// per-rule accounting.
pub fn headless_replace(config: Option<PatternConfig>, content: &[u8]) -> ReplacementOutcome {
    match config {
        Some(config) => RegexEngine::new(config).replace(content),
        None => ReplacementOutcome::unchanged(content),
    }
}

/// Finds all matches of every rule of `config` in `content`.
pub fn headless_extract_string(config: PatternConfig, content: &str) -> Vec<MatchRecord> {
    RegexEngine::new(config).extract(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternRule;

    #[test]
    fn test_missing_config_is_identity() {
        assert_eq!(headless_replace_string(None, "Original text"), "Original text");
        assert_eq!(headless_replace(None, b"x").total, 0);
        assert_eq!(headless_replace(None, b"\xfe").text, b"\xfe");
    }

    #[test]
    fn test_headless_replace_with_html_rule() {
        let config = PatternConfig::new(vec![PatternRule::new(
            "style",
            r#" style="[^"]*""#,
            "remove style",
            "",
        )]);
        assert_eq!(
            headless_replace_string(Some(config), r#"<p style="color: red;">Text</p>"#),
            "<p>Text</p>"
        );
    }

    #[test]
    fn test_headless_extract() {
        let config = PatternConfig::new(vec![PatternRule::new("emoji", "😀", "", "")]);
        let records = headless_extract_string(config, "テスト 😀 テスト");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "😀");
    }
}
