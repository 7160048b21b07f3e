// regsweep-core/src/engines/regex_engine.rs
//! A `PatternEngine` implementation backed by the `regex` crate.
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use crate::config::PatternConfig;
use crate::engine::PatternEngine;
use crate::pattern_match::{MatchRecord, line_of_first_occurrence, log_match_debug};
use crate::report::{ReplacementOutcome, RuleReplacementCount};
use crate::rules::compiler::{CompiledRule, CompiledRules, compile_rules};

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: CompiledRules,
    config: PatternConfig,
}

impl RegexEngine {
    /// Compiles `config` and builds the engine.
    ///
    /// Never fails: rules whose pattern does not compile are skipped and made
    /// available through [`PatternEngine::compile_failures`].
    pub fn new(config: PatternConfig) -> Self {
        let compiled_rules = compile_rules(&config.patterns);
        Self {
            compiled_rules,
            config,
        }
    }

    /// Applies one rule to `current`, returning the new text and match count.
    fn apply_rule(rule: &CompiledRule, current: Vec<u8>) -> (Vec<u8>, usize) {
        let count = rule.regex.find_iter(&current).count();
        if count == 0 {
            return (current, 0);
        }
        let replaced = rule
            .regex
            .replace_all(&current, rule.replacement.as_bytes())
            .into_owned();
        (replaced, count)
    }
}

impl PatternEngine for RegexEngine {
    fn extract(&self, content: &[u8]) -> Vec<MatchRecord> {
        let mut records = Vec::new();

        for rule in &self.compiled_rules.rules {
            for found in rule.regex.find_iter(content) {
                let record = MatchRecord {
                    rule_name: rule.name.clone(),
                    line: line_of_first_occurrence(content, found.as_bytes()),
                    text: String::from_utf8_lossy(found.as_bytes()).into_owned(),
                };
                log_match_debug(module_path!(), &record);
                records.push(record);
            }
        }

        debug!("Extraction finished with {} matches.", records.len());
        records
    }

    fn replace(&self, content: &[u8]) -> ReplacementOutcome {
        let mut per_rule = Vec::new();

        let text = self
            .compiled_rules
            .rules
            .iter()
            .fold(content.to_vec(), |current, rule| {
                let (next, count) = Self::apply_rule(rule, current);
                if count > 0 {
                    debug!("Rule '{}' replaced {} matches.", rule.name, count);
                    per_rule.push(RuleReplacementCount {
                        rule_name: rule.name.clone(),
                        count,
                    });
                }
                next
            });

        let total = per_rule.iter().map(|r| r.count).sum();
        info!("Replacement finished: {} replacements across {} rules.", total, per_rule.len());
        ReplacementOutcome {
            text,
            per_rule,
            total,
        }
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_config(&self) -> &PatternConfig {
        &self.config
    }
}
