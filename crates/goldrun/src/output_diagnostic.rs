// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal error output for the binary.
//!
//! Errors are printed as `goldrun: error: <message>` on stderr, with the
//! `error:` label in red when stderr is a terminal. The report on stdout is
//! left untouched so piped output stays parseable.

use std::io::{self, IsTerminal, Write};

const PREFIX: &str = "goldrun";

/// Print a fatal error to stderr.
pub fn print_error(err: impl std::fmt::Display) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_error(&mut stderr.lock(), err, is_tty);
}

fn write_error<W: Write>(writer: &mut W, err: impl std::fmt::Display, is_terminal: bool) {
    let label = if is_terminal {
        "\x1b[1;31merror:\x1b[0m"
    } else {
        "error:"
    };
    // Nothing left to report to if stderr itself is gone
    let _ = writeln!(writer, "{}: {} {}", PREFIX, label, err);
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
