// regsweep/src/main.rs
//! regsweep entry point.
//!
//! Loads the configuration, then the input file, then runs extraction or
//! replacement. Configuration or input problems are fatal; a rule whose
//! pattern does not compile is reported and skipped. The input is read as raw
//! bytes, so files that are not valid UTF-8 are processed rather than rejected.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs;

use regsweep::cli::Cli;
use regsweep::commands::{self, Console};
use regsweep::logger;
use regsweep::ui::theme::build_theme_map;
use regsweep::{ExtractOptions, ReplaceOptions, run_extract, run_replace};
use regsweep_core::{PatternConfig, RegexEngine};

fn main() -> Result<()> {
    let args = Cli::parse();

    logger::init_logger(logger::level_for_flags(args.quiet, args.debug));
    info!("regsweep started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = build_theme_map(args.theme.as_ref()).context("Theme error")?;
    let console = Console::new(theme_map, args.no_color);

    let config = PatternConfig::load_from_file(&args.config)?;

    let input = fs::read(&args.input)
        .with_context(|| format!("Failed to read input file {}", args.input.display()))?;

    let engine = RegexEngine::new(config);
    commands::report_compile_failures(&engine, &console);

    if args.replace {
        let opts = ReplaceOptions {
            input_path: args.input.clone(),
            output_path: args.output.clone(),
            quiet: args.quiet,
        };
        run_replace(&engine, &input, &opts, &console)?;
    } else {
        let opts = ExtractOptions { json: args.json };
        run_extract(&engine, &input, &opts, &console)?;
    }

    Ok(())
}
