// regsweep-core/src/engine.rs
//! Defines the core `PatternEngine` trait.
//!
//! The trait decouples the command-line program from the way rules are
//! matched and applied. Both operations are pure: they take the input text and
//! return data, and never print or touch the file system. Input is taken as
//! bytes so files that are not valid UTF-8 can still be processed.
//!
//! License: MIT OR APACHE 2.0

use crate::config::PatternConfig;
use crate::pattern_match::MatchRecord;
use crate::report::ReplacementOutcome;
use crate::rules::compiler::{CompiledRules, RuleCompileFailure};

/// The contract every pattern engine adheres to.
pub trait PatternEngine {
    /// Finds every match of every rule in `content` without modifying it.
    ///
    /// Each rule is matched against the original input. Records are grouped by
    /// rule (configuration order), then by position of the match.
    fn extract(&self, content: &[u8]) -> Vec<MatchRecord>;

    /// Applies all rules in order, each one seeing the output of the previous.
    fn replace(&self, content: &[u8]) -> ReplacementOutcome;

    /// The rules that compiled successfully, in configuration order.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Rules that were skipped because their pattern failed to compile.
    fn compile_failures(&self) -> &[RuleCompileFailure] {
        &self.compiled_rules().failures
    }

    /// The configuration the engine was built from.
    fn get_config(&self) -> &PatternConfig;
}
