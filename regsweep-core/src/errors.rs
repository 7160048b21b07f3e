//! errors.rs - Custom error types for the regsweep-core library.
//!
//! Fatal problems (unreadable or malformed configuration) are surfaced through
//! `anyhow` with context; this enum covers the failures callers may want to
//! match on, most importantly a single rule whose pattern does not compile.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `regsweep-core` library.
///
/// `#[non_exhaustive]` so new variants can be added without breaking callers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegsweepError {
    #[error("Failed to compile pattern rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),
}
