//! Rule preparation for the regex engine.
//!
//! Turns the configured `PatternRule`s into compiled regular expressions,
//! isolating per-rule compile failures so one bad pattern never aborts a run.

pub mod compiler;
