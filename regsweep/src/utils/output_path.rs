//! Derives the file name replacement mode writes to.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix inserted between the file stem and the extension.
pub const REPLACED_SUFFIX: &str = "_replaced";

/// `dir/name.ext` becomes `dir/name_replaced.ext`; `dir/name` becomes
/// `dir/name_replaced`. Only the last extension is split off. A dotfile with
/// no further extension (`.hidden`) is all stem: `.hidden_replaced`.
pub fn replaced_output_path(input: &Path) -> PathBuf {
    let mut file_name = OsString::new();
    if let Some(stem) = input.file_stem() {
        file_name.push(stem);
    }
    file_name.push(REPLACED_SUFFIX);
    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }
    input.with_file_name(file_name)
}
