//! compiler.rs - Compiles pattern rules into regular expressions.
//!
//! Every enabled rule is compiled with "dot matches newline" turned on, so a
//! pattern such as `<script>.*</script>` can span line breaks. A rule that
//! fails to compile is recorded and skipped; the remaining rules still compile.
//!
//! Rules are compiled as byte regexes so input that is not valid UTF-8 can
//! still be processed. Unicode mode stays on for literals, `.` and `\p{..}`,
//! but the Perl classes `\d`, `\w`, `\s` and the `\b` boundary are ASCII-only:
//! `\d` does not match full-width digits such as `１２３`.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::bytes::{Regex, RegexBuilder};
use std::borrow::Cow;

use crate::config::PatternRule;
use crate::errors::RegsweepError;

/// Upper bound for the compiled size of a single rule's regex.
pub const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single compiled pattern rule, ready to be applied.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The replacement template of the rule.
    pub replacement: String,
    /// The name of the rule, as configured.
    pub name: String,
    pub description: String,
}

/// A rule that was skipped because its pattern did not compile.
#[derive(Debug)]
pub struct RuleCompileFailure {
    pub rule_name: String,
    pub error: RegsweepError,
}

/// The compiled rule set, in configuration order, plus any skipped rules.
#[derive(Debug, Default)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
    pub failures: Vec<RuleCompileFailure>,
}

impl CompiledRules {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// ASCII spellings of the Perl classes, usable inside or outside `[...]`.
fn ascii_class(class: char) -> Option<&'static str> {
    match class {
        'd' => Some("[0-9]"),
        'D' => Some("[^0-9]"),
        'w' => Some("[0-9A-Za-z_]"),
        'W' => Some("[^0-9A-Za-z_]"),
        's' => Some(r"[\t\n\f\r ]"),
        'S' => Some(r"[^\t\n\f\r ]"),
        'b' => Some(r"(?-u:\b)"),
        'B' => Some(r"(?-u:\B)"),
        _ => None,
    }
}

/// Rewrites `\d \D \w \W \s \S \b \B` into their ASCII-only forms.
///
/// Other escapes (including `\\`) are copied untouched. Nested classes such as
/// `[a[0-9]]` are valid syntax, so the replacement works inside brackets too.
pub fn ascii_perl_classes(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains('\\') {
        return Cow::Borrowed(pattern);
    }

    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped) => match ascii_class(escaped) {
                Some(ascii) => out.push_str(ascii),
                None => {
                    out.push('\\');
                    out.push(escaped);
                }
            },
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// Builds the regex for a single pattern with the engine-wide flags.
pub fn build_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&ascii_perl_classes(pattern))
        .dot_matches_new_line(true)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
}

/// Compiles a list of `PatternRule`s into `CompiledRules`.
///
/// Disabled rules (empty pattern) are skipped silently. Rules that fail to
/// compile are skipped with a warning and listed in `failures`.
pub fn compile_rules(rules: &[PatternRule]) -> CompiledRules {
    debug!("Starting compilation of {} rules.", rules.len());

    let mut compiled = CompiledRules::default();

    for rule in rules {
        if !rule.is_enabled() {
            debug!("Skipping rule '{}' because its pattern is empty.", rule.name);
            continue;
        }

        match build_regex(&rule.pattern) {
            Ok(regex) => {
                debug!(
                    target: "regsweep_core::rules::compiler",
                    "Rule '{}' compiled successfully.",
                    rule.name
                );
                compiled.rules.push(CompiledRule {
                    regex,
                    replacement: rule.replacement.clone(),
                    name: rule.name.clone(),
                    description: rule.description.clone(),
                });
            }
            Err(e) => {
                let error = RegsweepError::RuleCompilationError(rule.name.clone(), e);
                warn!("{}; rule skipped.", error);
                compiled.failures.push(RuleCompileFailure {
                    rule_name: rule.name.clone(),
                    error,
                });
            }
        }
    }

    debug!(
        "Finished compiling rules. Compiled: {}, skipped: {}.",
        compiled.rules.len(),
        compiled.failures.len()
    );
    compiled
}
