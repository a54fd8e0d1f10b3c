//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Diagnostics take an explicit sink so callers decide where stderr goes.

use std::io::Write;

use colored::Colorize;

/// Write error (red bold "error:" prefix)
pub fn error(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) {
    let _ = writeln!(w, "{}: {}", "error".red().bold(), msg);
}

/// Write plain diagnostic text (usage, help)
pub fn plain(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) {
    let _ = writeln!(w, "{}", msg);
}

/// Write indented label/value detail
pub fn detail(
    w: &mut dyn Write,
    label: &str,
    value: &(impl std::fmt::Display + ?Sized),
) -> std::io::Result<()> {
    writeln!(w, "  {}: {}", label, value)
}
