//! Statistics reported to the user after a run.
//!
//! The engine only produces data; rendering is left to the caller.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::config::PatternConfig;
use crate::pattern_match::MatchRecord;

/// Per-rule match count for the extraction statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleStatistic {
    pub name: String,
    pub description: String,
    pub count: usize,
}

/// Everything extraction mode reports: the matches and per-rule statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub total_matches: usize,
    pub matches: Vec<MatchRecord>,
    pub statistics: Vec<RuleStatistic>,
}

impl ExtractionReport {
    /// Builds the report for `matches` found with `config`.
    ///
    /// One statistics row per enabled rule, in configuration order. Counts are
    /// tallied by rule name, so rules sharing a name share a count.
    pub fn new(config: &PatternConfig, matches: Vec<MatchRecord>) -> Self {
        let mut by_name: HashMap<&str, usize> = HashMap::new();
        for m in &matches {
            *by_name.entry(m.rule_name.as_str()).or_default() += 1;
        }

        let statistics = config
            .enabled_rules()
            .map(|rule| RuleStatistic {
                name: rule.name.clone(),
                description: rule.description.clone(),
                count: by_name.get(rule.name.as_str()).copied().unwrap_or(0),
            })
            .collect();

        Self {
            total_matches: matches.len(),
            matches,
            statistics,
        }
    }
}

/// Number of replacements a single rule made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReplacementCount {
    pub rule_name: String,
    pub count: usize,
}

/// Result of replacement mode: the final text and its accounting.
///
/// `text` holds the raw output bytes, written to disk as-is. `per_rule` only
/// lists rules that matched at least once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplacementOutcome {
    pub text: Vec<u8>,
    pub per_rule: Vec<RuleReplacementCount>,
    pub total: usize,
}

impl ReplacementOutcome {
    /// An outcome that leaves `text` untouched.
    pub fn unchanged(text: &[u8]) -> Self {
        Self {
            text: text.to_vec(),
            ..Self::default()
        }
    }

    /// The output text, with invalid UTF-8 shown as U+FFFD.
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}
