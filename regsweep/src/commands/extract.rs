//! Extraction mode: report every match without touching the input file.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};

use regsweep_core::{ExtractionReport, PatternEngine};

use crate::commands::Console;
use crate::ui::report_view;

/// Options for the extraction run.
#[derive(Debug, Default)]
pub struct ExtractOptions {
    /// Print the report as JSON instead of the human-readable layout.
    pub json: bool,
}

/// Runs extraction and prints the report to stdout.
pub fn run_extract(
    engine: &dyn PatternEngine,
    input: &[u8],
    opts: &ExtractOptions,
    console: &Console,
) -> Result<ExtractionReport> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    run_extract_to(engine, input, opts, &mut writer, console.stdout_colors, console)
}

/// Same as [`run_extract`] but writes the report to `writer`.
pub fn run_extract_to<W: Write>(
    engine: &dyn PatternEngine,
    input: &[u8],
    opts: &ExtractOptions,
    writer: &mut W,
    enable_colors: bool,
    console: &Console,
) -> Result<ExtractionReport> {
    info!("Starting extraction.");

    let matches = engine.extract(input);
    let report = ExtractionReport::new(engine.get_config(), matches);
    debug!("Extraction produced {} matches.", report.total_matches);

    if opts.json {
        serde_json::to_writer_pretty(&mut *writer, &report).context("Failed to serialize extraction report")?;
        writeln!(writer)?;
    } else {
        report_view::print_extraction_report(&report, writer, &console.theme, enable_colors)
            .context("Failed to write extraction report")?;
    }

    info!("Extraction completed.");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use regsweep_core::{PatternConfig, PatternRule, RegexEngine};

    fn engine() -> RegexEngine {
        RegexEngine::new(PatternConfig::new(vec![
            PatternRule::new("word", "foo", "foo words", ""),
            PatternRule::new("off", "", "disabled", ""),
        ]))
    }

    #[test]
    fn human_report_lists_matches_and_statistics() {
        let console = Console::plain(ThemeStyle::default_theme_map());
        let mut buf = Vec::new();
        let report = run_extract_to(&engine(), b"foo\nbar foo", &ExtractOptions::default(), &mut buf, false, &console).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert_eq!(report.total_matches, 2);
        assert!(out.contains("Total matches: 2"));
        assert!(out.contains("[word] line 1:"));
        assert!(out.contains("word           : 2 matches (foo words)"));
        assert!(!out.contains("disabled"));
    }

    #[test]
    fn json_report_is_valid_json() {
        let console = Console::plain(ThemeStyle::default_theme_map());
        let mut buf = Vec::new();
        run_extract_to(&engine(), b"foo", &ExtractOptions { json: true }, &mut buf, false, &console).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total_matches"], 1);
        assert_eq!(value["matches"][0]["rule_name"], "word");
        assert_eq!(value["statistics"][0]["description"], "foo words");
    }

    #[test]
    fn invalid_utf8_match_text_is_rendered_lossily() {
        let console = Console::plain(ThemeStyle::default_theme_map());
        let mut buf = Vec::new();
        let report = run_extract_to(&engine(), b"\xfefoo\xff", &ExtractOptions { json: true }, &mut buf, false, &console).unwrap();
        assert_eq!(report.total_matches, 1);
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["matches"][0]["text"], "foo");
    }
}
