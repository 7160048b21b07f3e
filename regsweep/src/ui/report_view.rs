//! Renders extraction reports and replacement summaries.

use std::io::{self, Write};

use regsweep_core::{ExtractionReport, ReplacementOutcome, RuleCompileFailure};

use crate::ui::output_format::{print_error_message, styled};
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Width the rule name is padded to in the statistics table.
const STATS_NAME_WIDTH: usize = 15;

/// Prints the human-readable extraction report.
pub fn print_extraction_report<W: Write>(
    report: &ExtractionReport,
    writer: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let paint = |text: &str, entry| styled(text, entry, theme, enable_colors);

    writeln!(writer)?;
    writeln!(writer, "{}", paint("=== Extraction Results ===", ThemeEntry::Header))?;
    writeln!(
        writer,
        "Total matches: {}",
        paint(&report.total_matches.to_string(), ThemeEntry::Count)
    )?;
    writeln!(writer)?;

    for record in &report.matches {
        writeln!(
            writer,
            "{} {}:",
            paint(&format!("[{}]", record.rule_name), ThemeEntry::RuleName),
            paint(&format!("line {}", record.line), ThemeEntry::LineNumber)
        )?;
        writeln!(writer, "  -> {}", paint(&record.text, ThemeEntry::MatchText))?;
        writeln!(writer)?;
    }

    writeln!(writer, "{}", paint("=== Per-Pattern Statistics ===", ThemeEntry::Header))?;
    for stat in &report.statistics {
        writeln!(
            writer,
            "{}: {} matches ({})",
            paint(&format!("{:<width$}", stat.name, width = STATS_NAME_WIDTH), ThemeEntry::RuleName),
            paint(&stat.count.to_string(), ThemeEntry::Count),
            paint(&stat.description, ThemeEntry::Description)
        )?;
    }
    Ok(())
}

/// Prints the per-rule and total replacement counts.
pub fn print_replacement_summary<W: Write>(
    outcome: &ReplacementOutcome,
    writer: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let paint = |text: &str, entry| styled(text, entry, theme, enable_colors);

    for rule in &outcome.per_rule {
        writeln!(
            writer,
            "{} {} replacements",
            paint(&format!("[{}]", rule.rule_name), ThemeEntry::RuleName),
            paint(&rule.count.to_string(), ThemeEntry::Count)
        )?;
    }
    writeln!(
        writer,
        "Total replacements: {}",
        paint(&outcome.total.to_string(), ThemeEntry::Count)
    )
}

/// Reports rules that were skipped because their pattern did not compile.
pub fn print_compile_failures<W: Write>(
    failures: &[RuleCompileFailure],
    writer: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    for failure in failures {
        print_error_message(
            writer,
            &format!("{} (rule skipped)", failure.error),
            theme,
            enable_colors,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use regsweep_core::{MatchRecord, PatternConfig, PatternRule, RuleReplacementCount};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>, &ThemeMap) -> io::Result<()>,
    {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        f(&mut buf, &theme).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn extraction_report_layout() {
        let config = PatternConfig::new(vec![PatternRule::new("digits", r"\d+", "numbers", "")]);
        let report = ExtractionReport::new(
            &config,
            vec![MatchRecord { rule_name: "digits".into(), line: 2, text: "42".into() }],
        );
        let out = render(|w, t| print_extraction_report(&report, w, t, false));
        let expected = "\n=== Extraction Results ===\nTotal matches: 1\n\n[digits] line 2:\n  -> 42\n\n=== Per-Pattern Statistics ===\ndigits         : 1 matches (numbers)\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn replacement_summary_layout() {
        let outcome = ReplacementOutcome {
            text: Vec::new(),
            per_rule: vec![RuleReplacementCount { rule_name: "a".into(), count: 3 }],
            total: 3,
        };
        let out = render(|w, t| print_replacement_summary(&outcome, w, t, false));
        assert_eq!(out, "[a] 3 replacements\nTotal replacements: 3\n");
    }
}
