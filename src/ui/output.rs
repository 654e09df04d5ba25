//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON and
//! bypasses the table formatting here.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a success message (respects quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Format rows as a table with aligned columns.
///
/// The first row is treated as the header by the callers; no separator
/// line is drawn. Trailing whitespace is trimmed from each line.
pub fn format_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ");
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod verbosity {
        use super::*;

        #[test]
        fn quiet_wins_over_debug() {
            assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
            assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
            assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        }
    }

    mod table {
        use super::*;

        fn row(cells: &[&str]) -> Vec<String> {
            cells.iter().map(|c| c.to_string()).collect()
        }

        #[test]
        fn columns_align() {
            let rows = vec![row(&["SLUG", "VALUE"]), row(&["blue", "#0000ff"]), row(&["bright-red", "#f00"])];
            let table = format_table(&rows);
            assert_eq!(table, "SLUG        VALUE\nblue        #0000ff\nbright-red  #f00");
        }

        #[test]
        fn no_trailing_whitespace() {
            let rows = vec![row(&["long-slug", "x"]), row(&["a", "y"])];
            for line in format_table(&rows).lines() {
                assert_eq!(line, line.trim_end());
            }
        }

        #[test]
        fn empty_input() {
            assert_eq!(format_table(&[]), "");
        }
    }
}
