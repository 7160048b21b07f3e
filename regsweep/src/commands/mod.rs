//! Command implementations for the two run modes, plus shared console helpers.

pub mod extract;
pub mod replace;

use is_terminal::IsTerminal;
use std::io;

use regsweep_core::PatternEngine;

use crate::ui::output_format;
use crate::ui::report_view;
use crate::ui::theme::ThemeMap;

/// Theme plus the color decision for each output stream.
pub struct Console {
    pub theme: ThemeMap,
    pub stdout_colors: bool,
    pub stderr_colors: bool,
}

impl Console {
    /// Colors are used on a stream only when it is a terminal and not disabled.
    pub fn new(theme: ThemeMap, no_color: bool) -> Self {
        Self {
            theme,
            stdout_colors: !no_color && io::stdout().is_terminal(),
            stderr_colors: !no_color && io::stderr().is_terminal(),
        }
    }

    /// A console that never emits escape codes.
    pub fn plain(theme: ThemeMap) -> Self {
        Self {
            theme,
            stdout_colors: false,
            stderr_colors: false,
        }
    }

    /// Helper for printing success messages to stderr.
    pub fn success_msg(&self, msg: impl AsRef<str>) {
        let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), &self.theme, self.stderr_colors);
    }
}

/// Prints one error line per rule skipped at compile time. Never fatal.
pub fn report_compile_failures(engine: &dyn PatternEngine, console: &Console) {
    let failures = engine.compile_failures();
    if failures.is_empty() {
        return;
    }
    let _ = report_view::print_compile_failures(failures, &mut io::stderr(), &console.theme, console.stderr_colors);
}
