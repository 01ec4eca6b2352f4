// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console report: one line per fixture, then a summary.
//!
//! Colors are plain ANSI escapes, enabled by the caller (usually only when
//! stdout is a terminal).

use crate::outcome::{FailureReason, Outcome, RunResult};
use std::fmt;
use std::io::Write;

/// Column width the fixture name is padded to
pub const NAME_WIDTH: usize = 40;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Running pass/fail counts for one harness run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    /// Fold one outcome into the counts. Errored fixtures count as failed.
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Writes the human-readable report
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    verbose: bool,
    write_failed: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            verbose: false,
            write_failed: false,
        }
    }

    /// Print failure details under each FAILED line
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether any report write has failed (e.g. stdout is a closed pipe)
    pub fn write_failed(&self) -> bool {
        self.write_failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one line. The run goes on after a failed write; the first
    /// failure is logged.
    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            self.failed_write(e);
        }
    }

    fn failed_write(&mut self, e: std::io::Error) {
        if !self.write_failed {
            tracing::warn!(error = %e, "failed to write report");
            self.write_failed = true;
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Report a single fixture.
    pub fn fixture(&mut self, result: &RunResult) {
        let marker = if result.outcome.is_passed() {
            self.paint("PASSED", GREEN)
        } else {
            self.paint("FAILED", RED)
        };
        self.line(format_args!(
            "{:<width$} {}",
            result.name,
            marker,
            width = NAME_WIDTH
        ));

        if self.verbose {
            self.details(&result.outcome);
        }
    }

    fn details(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Passed => {}
            Outcome::Errored { cause } => {
                self.line(format_args!("    error: {}", cause));
            }
            Outcome::Failed { reason } => {
                self.line(format_args!("    {}", reason));
                match reason {
                    FailureReason::ExitStatus { stderr, .. } if !stderr.is_empty() => {
                        self.line(format_args!("    stderr:"));
                        self.indented(stderr);
                    }
                    FailureReason::OutputMismatch {
                        diff: Some(diff), ..
                    } => self.indented(diff),
                    _ => {}
                }
            }
        }
    }

    fn indented(&mut self, text: &str) {
        for line in text.lines() {
            self.line(format_args!("      {}", line));
        }
    }

    /// Report the aggregate counts, framed by blank lines.
    pub fn summary(&mut self, tally: &Tally) {
        let passed = format!("passed: {}", tally.passed);
        let failed = format!("failed: {}", tally.failed);
        let line = if self.color {
            format!("{}{}  {}{}{}", GREEN, passed, RED, failed, RESET)
        } else {
            format!("{}  {}", passed, failed)
        };
        self.line(format_args!(""));
        self.line(format_args!("{}  of {} tests", line, tally.total()));
        self.line(format_args!(""));
        if let Err(e) = self.out.flush() {
            self.failed_write(e);
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
