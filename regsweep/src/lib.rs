// regsweep/src/lib.rs
//! # regsweep CLI Application
//!
//! The command-line surface of regsweep: argument parsing, logging setup,
//! report rendering and output file writing around `regsweep-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::extract::{ExtractOptions, run_extract};
pub use commands::replace::{ReplaceOptions, run_replace};
