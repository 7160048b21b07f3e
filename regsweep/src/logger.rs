//! Logging setup for the regsweep binary.
//!
//! Library code logs through the `log` facade; this installs `env_logger` as
//! the backend. `RUST_LOG` is honored unless a level override is given.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Filter used when neither `RUST_LOG` nor an override is present.
pub const DEFAULT_FILTER: &str = "error";

/// Initializes the global logger. Safe to call more than once.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);

    // A logger may already be installed (tests, repeated calls).
    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to a level override.
pub fn level_for_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    match (quiet, debug) {
        (_, true) => Some(LevelFilter::Debug),
        (true, false) => Some(LevelFilter::Off),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_levels() {
        assert_eq!(level_for_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_for_flags(true, false), Some(LevelFilter::Off));
        assert_eq!(level_for_flags(false, false), None);
    }

    #[test]
    fn init_is_idempotent() {
        init_logger(Some(LevelFilter::Debug));
        init_logger(None);
    }
}
