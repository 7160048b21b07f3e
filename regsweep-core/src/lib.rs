// regsweep-core/src/lib.rs
//! # regsweep Core Library
//!
//! `regsweep-core` holds the platform-independent logic of regsweep: loading an
//! ordered list of regex rules from YAML, and applying them to a text either to
//! extract matches or to rewrite the text.
//!
//! The library performs no console output and writes no files; the command-line
//! program renders reports and writes the rewritten copy.
//!
//! ## Modules
//!
//! * `config`: `PatternRule` and `PatternConfig`, and the YAML loader.
//! * `rules`: compilation of rules into regular expressions. Input is matched
//!   as bytes; `\d`, `\w`, `\s` and `\b` are ASCII-only.
//! * `engine`: the `PatternEngine` trait.
//! * `engines`: concrete engines (`RegexEngine`).
//! * `pattern_match`: `MatchRecord` and line-number attribution.
//! * `report`: extraction statistics and replacement accounting.
//! * `headless`: one-shot helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use regsweep_core::{PatternConfig, PatternEngine, PatternRule, RegexEngine};
//!
//! let config = PatternConfig::new(vec![
//!     PatternRule::new("hello", "Hello", "greeting", "Hi"),
//!     PatternRule::new("price", r"\$(\d+)", "prices", "USD $1"),
//! ]);
//! let engine = RegexEngine::new(config);
//!
//! let outcome = engine.replace(b"Hello, that is $5.");
//! assert_eq!(outcome.text_lossy(), "Hi, that is USD 5.");
//! assert_eq!(outcome.total, 2);
//!
//! let matches = engine.extract(b"Hello\nHello");
//! assert_eq!(matches.len(), 2);
//! ```
//!
//! ## Error Handling
//!
//! Loading a configuration returns `anyhow::Result`. A rule whose pattern does
//! not compile is not an error for the run: it is skipped and reported through
//! `PatternEngine::compile_failures` as a `RegsweepError::RuleCompilationError`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod pattern_match;
pub mod report;
pub mod rules;

/// Re-exports the configuration types.
pub use config::{DEFAULT_CONFIG_FILE, PatternConfig, PatternRule};

pub use errors::RegsweepError;

pub use engine::PatternEngine;
pub use engines::regex_engine::RegexEngine;

pub use pattern_match::{MatchRecord, line_of_first_occurrence};

pub use report::{ExtractionReport, ReplacementOutcome, RuleReplacementCount, RuleStatistic};

pub use headless::{headless_extract_string, headless_replace, headless_replace_string};

pub use rules::compiler::{
    CompiledRule, CompiledRules, RuleCompileFailure, ascii_perl_classes, compile_rules,
};
