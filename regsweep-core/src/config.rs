//! Configuration management for `regsweep-core`.
//!
//! This module defines the pattern rule data structures and the YAML loader.
//! A configuration is an ordered list of rules under the `patterns` key; the
//! order is significant because replacement mode feeds each rule the output
//! of the previous one.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name used when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// A single pattern rule.
///
/// Every field defaults to an empty string when absent from the YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternRule {
    /// Identifier used for reporting. Need not be unique.
    pub name: String,
    /// The regex source. Empty means the rule is disabled.
    pub pattern: String,
    /// Human-readable description shown in the statistics table.
    pub description: String,
    /// Replacement template; supports `$1`, `${1}` and named group references.
    pub replacement: String,
}

impl PatternRule {
    /// Convenience constructor used heavily in tests and by library callers.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        description: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            description: description.into(),
            replacement: replacement.into(),
        }
    }

    /// A rule with an empty pattern is never compiled, counted or reported.
    pub fn is_enabled(&self) -> bool {
        !self.pattern.is_empty()
    }
}

/// Top-level configuration: the ordered rule set.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternConfig {
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
}

impl PatternConfig {
    pub fn new(patterns: Vec<PatternRule>) -> Self {
        Self { patterns }
    }

    /// Loads pattern rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading pattern rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded {} rules from file {}.", config.patterns.len(), path.display());
        Ok(config)
    }

    /// Parses a configuration from YAML text.
    ///
    /// An empty document (or one holding only comments) yields an empty rule set.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let has_content = text
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            debug!("Configuration document is empty; using an empty rule set.");
            return Ok(Self::default());
        }

        let config: PatternConfig = serde_yml::from_str(text).context("Invalid YAML configuration")?;
        debug!(
            "Parsed {} rules ({} enabled).",
            config.patterns.len(),
            config.enabled_rules().count()
        );
        Ok(config)
    }

    /// Rules with a non-empty pattern, in configuration order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &PatternRule> {
        self.patterns.iter().filter(|rule| rule.is_enabled())
    }
}
