//! Console presentation: theme, message helpers and report rendering.

pub mod output_format;
pub mod report_view;
pub mod theme;
