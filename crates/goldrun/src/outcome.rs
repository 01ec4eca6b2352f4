// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-fixture verdicts.

use crate::compare::Mismatch;
use std::path::PathBuf;
use std::time::Duration;

/// Verdict for a single fixture run
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Exit status 0 and byte-identical output
    Passed,
    /// The subject program misbehaved or the fixture is incomplete
    Failed { reason: FailureReason },
    /// The harness itself could not complete the run
    Errored { cause: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Combine exit status and comparison into a verdict.
    ///
    /// Passing needs both a zero exit code and no mismatch. A bad exit status
    /// takes precedence over a mismatch when both occur.
    pub fn classify(code: Option<i32>, stderr: String, mismatch: Option<Mismatch>) -> Self {
        if code != Some(0) {
            return Outcome::Failed {
                reason: FailureReason::ExitStatus { code, stderr },
            };
        }
        match mismatch {
            None => Outcome::Passed,
            Some(mismatch) => Outcome::Failed {
                reason: FailureReason::OutputMismatch {
                    mismatch,
                    diff: None,
                },
            },
        }
    }
}

/// Why a fixture failed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// Non-zero exit, or killed by a signal (`code` is `None`)
    ExitStatus { code: Option<i32>, stderr: String },
    /// Captured output differs from the expected file
    OutputMismatch {
        mismatch: Mismatch,
        /// Rendered diff, filled in only when details are requested
        diff: Option<String>,
    },
    /// No expected-output file for this fixture
    MissingExpected { path: PathBuf },
    /// Subject program did not finish in time and was killed
    Timeout { after: Duration },
    /// Subject program could not be started
    Launch { message: String },
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::ExitStatus {
                code: Some(code), ..
            } => write!(f, "exited with status {}", code),
            FailureReason::ExitStatus { code: None, .. } => write!(f, "terminated by signal"),
            FailureReason::OutputMismatch { mismatch, .. } => write!(f, "{}", mismatch),
            FailureReason::MissingExpected { path } => {
                write!(f, "missing expected output '{}'", path.display())
            }
            FailureReason::Timeout { after } => {
                write!(f, "timed out after {}ms", after.as_millis())
            }
            FailureReason::Launch { message } => {
                write!(f, "failed to launch subject program: {}", message)
            }
        }
    }
}

/// Result of running one fixture, kept only until it is reported
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    pub name: String,
    /// Exit code of the subject program, if it exited normally
    pub exit_code: Option<i32>,
    pub outcome: Outcome,
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
