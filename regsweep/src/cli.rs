//! This file defines the command-line interface (CLI) for the regsweep application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use regsweep_core::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "regsweep",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract or rewrite text with an ordered list of regex rules",
    long_about = "regsweep applies the regex rules listed in a YAML configuration to a text file. By default it reports every match with its line number and per-rule statistics. With --replace it applies the rules in order, each one seeing the output of the previous, and writes the result next to the input as <name>_replaced.<ext>.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// The text file to process.
    #[arg(value_name = "INPUT", help = "The text file to process.")]
    pub input: PathBuf,

    /// Path to the pattern configuration file (YAML).
    #[arg(
        value_name = "CONFIG",
        default_value = DEFAULT_CONFIG_FILE,
        help = "Path to the pattern configuration file (YAML)."
    )]
    pub config: PathBuf,

    /// Run replacement instead of extraction.
    #[arg(long, short = 'r', help = "Replace matches and write the result to a new file instead of reporting them.")]
    pub replace: bool,

    /// Override the derived output path in replacement mode.
    #[arg(long, short = 'o', value_name = "FILE", requires = "replace", help = "Write the replaced text to this file instead of <name>_replaced.<ext>.")]
    pub output: Option<PathBuf>,

    /// Print the extraction report as JSON.
    #[arg(long = "json", conflicts_with = "replace", help = "Print the extraction report to stdout as JSON.")]
    pub json: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress informational messages and the replacement summary.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    #[arg(long = "no-color", help = "Disable colored output.")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_conventional_name() {
        let cli = Cli::try_parse_from(["regsweep", "input.txt"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
        assert!(!cli.replace);
    }

    #[test]
    fn replace_flag_and_config_in_any_order() {
        let cli = Cli::try_parse_from(["regsweep", "input.txt", "-r", "rules.yaml"]).unwrap();
        assert!(cli.replace);
        assert_eq!(cli.config, PathBuf::from("rules.yaml"));
    }

    #[test]
    fn json_conflicts_with_replace() {
        assert!(Cli::try_parse_from(["regsweep", "in.txt", "--replace", "--json"]).is_err());
    }
}
