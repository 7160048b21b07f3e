//! Replacement mode: apply every rule in order and write a new file.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::PathBuf;

use regsweep_core::{PatternEngine, ReplacementOutcome};

use crate::commands::Console;
use crate::ui::report_view;
use crate::utils::output_path::replaced_output_path;

/// Options for the replacement run.
#[derive(Debug)]
pub struct ReplaceOptions {
    pub input_path: PathBuf,
    /// Explicit destination; defaults to `<name>_replaced.<ext>` beside the input.
    pub output_path: Option<PathBuf>,
    pub quiet: bool,
}

impl ReplaceOptions {
    pub fn destination(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| replaced_output_path(&self.input_path))
    }
}

/// Runs replacement, writes the result and returns where it was written.
pub fn run_replace(
    engine: &dyn PatternEngine,
    input: &[u8],
    opts: &ReplaceOptions,
    console: &Console,
) -> Result<(PathBuf, ReplacementOutcome)> {
    info!("Starting replacement for {}.", opts.input_path.display());

    let outcome = engine.replace(input);
    debug!(
        "Replacement changed length from {} to {} bytes.",
        input.len(),
        outcome.text.len()
    );

    let destination = opts.destination();
    fs::write(&destination, &outcome.text)
        .with_context(|| format!("Failed to write output file {}", destination.display()))?;

    if !opts.quiet {
        report_view::print_replacement_summary(&outcome, &mut io::stderr(), &console.theme, console.stderr_colors)
            .context("Failed to write replacement summary")?;
        console.success_msg(format!("Saved replaced text to: {}", destination.display()));
    }

    info!("Replacement completed.");
    Ok((destination, outcome))
}
