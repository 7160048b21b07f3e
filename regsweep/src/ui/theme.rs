//! Module for managing the application's console theme.
//!
//! Users can customize the colors of the report and message output with a YAML
//! file mapping theme entries to 16-color ANSI names. Missing entries fall
//! back to the defaults.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles of the extraction report.
    Header,
    /// Successful operation messages.
    Success,
    /// Error messages, including skipped rules.
    Error,
    /// The `[rule]` label in front of each match.
    RuleName,
    /// The line number of a match.
    LineNumber,
    /// The matched text itself.
    MatchText,
    /// Match and replacement counts.
    Count,
    /// Rule descriptions in the statistics table.
    Description,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 8] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Error,
        ThemeEntry::RuleName,
        ThemeEntry::LineNumber,
        ThemeEntry::MatchText,
        ThemeEntry::Count,
        ThemeEntry::Description,
    ];
}

/// Color names accepted in a theme file, matched case-insensitively.
const NAMED_COLORS: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

/// A validated 16-color ANSI name, stored lowercase.
///
/// Deserialization goes through [`FromStr`], so an unknown name in a theme
/// file is a parse error instead of a silent fallback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ThemeColor {
    Named(String),
}

/// An unknown color name found in a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
        write!(f, "unknown color '{}', expected one of: {}", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if NAMED_COLORS.iter().any(|(name, _)| *name == lower) {
            Ok(ThemeColor::Named(lower))
        } else {
            Err(ParseThemeColorError(s.to_string()))
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the color into its `owo_colors::AnsiColors` counterpart.
    pub fn to_ansi_color(&self) -> AnsiColors {
        let ThemeColor::Named(name) = self;
        NAMED_COLORS
            .iter()
            .find(|(known, _)| *known == name.as_str())
            .map(|(_, color)| *color)
            .unwrap_or(AnsiColors::Default)
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    fn with_fg(name: &str) -> Self {
        ThemeStyle { fg: Some(ThemeColor::named(name)) }
    }

    /// Loads a theme from a YAML file and fills missing entries from the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns the default theme map.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, Self::with_fg("brightcyan"));
        default_theme.insert(ThemeEntry::Success, Self::with_fg("green"));
        default_theme.insert(ThemeEntry::Error, Self::with_fg("red"));
        default_theme.insert(ThemeEntry::RuleName, Self::with_fg("magenta"));
        default_theme.insert(ThemeEntry::LineNumber, Self::with_fg("brightblack"));
        default_theme.insert(ThemeEntry::Count, Self::with_fg("brightyellow"));

        for entry in ThemeEntry::ALL {
            default_theme.entry(entry).or_insert_with(|| Self::with_fg("white"));
        }
        default_theme
    }
}
