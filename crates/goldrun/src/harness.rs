// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery → run → compare → report loop.
//!
//! Fixtures run one at a time. Whatever happens to one fixture becomes an
//! [`Outcome`]; only configuration and discovery problems abort a run.

use crate::capture::CaptureFile;
use crate::compare::{compare, render_diff};
use crate::config::{ConfigError, HarnessConfig};
use crate::fixture::{self, DiscoveryError, Fixture, FixtureLayout};
use crate::outcome::{FailureReason, Outcome, RunResult};
use crate::report::{Reporter, Tally};
use crate::subject::{anchored, SubjectProgram, SubjectRun};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes of the `goldrun` binary
pub mod exit_codes {
    /// Every fixture passed
    pub const SUCCESS: i32 = 0;
    /// At least one fixture failed
    pub const FAILURES: i32 = 1;
    /// The harness could not run (configuration or discovery error)
    pub const ERROR: i32 = 2;
}

/// Errors that abort a whole harness run
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Runs a subject program over every fixture in a directory
#[derive(Clone, Debug)]
pub struct Harness {
    dir: PathBuf,
    layout: FixtureLayout,
    filters: Vec<String>,
    subject: SubjectProgram,
}

impl Harness {
    /// Create a harness over `dir` with the default fixture layout.
    ///
    /// A relative `dir` is resolved against the current working directory.
    pub fn new(dir: impl Into<PathBuf>, subject: SubjectProgram) -> Self {
        Self {
            dir: anchored(dir.into()),
            layout: FixtureLayout::default(),
            filters: Vec::new(),
            subject,
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        let subject = SubjectProgram::new(&config.program).with_timeout(config.timeout);
        Self::new(&config.dir, subject)
            .with_layout(config.layout.clone())
            .with_filters(config.filters.clone())
    }

    /// Set layout
    pub fn with_layout(mut self, layout: FixtureLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set name filters
    pub fn with_filters(mut self, filters: Vec<String>) -> Self {
        self.filters = filters;
        self
    }

    /// Fixtures this harness would run, in report order.
    pub fn fixtures(&self) -> Result<Vec<Fixture>, DiscoveryError> {
        let all = self.layout.discover(&self.dir)?;
        Ok(fixture::select(all, &self.filters))
    }

    /// Run every fixture, reporting each as it finishes, then the summary.
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<Tally, HarnessError> {
        let fixtures = self.fixtures()?;
        let with_diff = reporter.verbose();

        let mut tally = Tally::default();
        for fixture in &fixtures {
            let result = self.execute(fixture, with_diff).await;
            tally.record(&result.outcome);
            reporter.fixture(&result);
        }
        reporter.summary(&tally);

        tracing::debug!(
            passed = tally.passed,
            failed = tally.failed,
            total = tally.total(),
            "run finished"
        );
        Ok(tally)
    }

    /// Run a single fixture without rendering a diff.
    pub async fn run_fixture(&self, fixture: &Fixture) -> RunResult {
        self.execute(fixture, false).await
    }

    async fn execute(&self, fixture: &Fixture, with_diff: bool) -> RunResult {
        let mut result = RunResult {
            name: fixture.name.clone(),
            exit_code: None,
            outcome: Outcome::Passed,
        };

        // Removed when dropped, whichever way this function returns
        let capture = match CaptureFile::create_in(&self.dir) {
            Ok(capture) => capture,
            Err(e) => {
                result.outcome = errored(format_args!("failed to create capture file: {}", e));
                return result;
            }
        };
        let stdout = match capture.writer() {
            Ok(file) => file,
            Err(e) => {
                result.outcome = errored(format_args!("failed to open capture file: {}", e));
                return result;
            }
        };

        let outcome = match self.subject.run(&fixture.input, &self.dir, stdout).await {
            Err(e) => errored(e),
            Ok(SubjectRun::LaunchFailed { message }) => Outcome::Failed {
                reason: FailureReason::Launch { message },
            },
            Ok(SubjectRun::TimedOut { after }) => Outcome::Failed {
                reason: FailureReason::Timeout { after },
            },
            Ok(SubjectRun::Exited { code, stderr }) => {
                result.exit_code = code;
                verify(fixture, &capture, code, stderr, with_diff)
            }
        };
        result.outcome = outcome;
        capture.remove();

        tracing::debug!(fixture = %fixture.name, outcome = ?result.outcome, "fixture finished");
        result
    }
}

/// Compare captured output against the expected file and classify.
fn verify(
    fixture: &Fixture,
    capture: &CaptureFile,
    code: Option<i32>,
    stderr: String,
    with_diff: bool,
) -> Outcome {
    let expected = match std::fs::read(&fixture.expected) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Outcome::Failed {
                reason: FailureReason::MissingExpected {
                    path: fixture.expected.clone(),
                },
            }
        }
        Err(e) => {
            return errored(format_args!(
                "failed to read '{}': {}",
                fixture.expected.display(),
                e
            ))
        }
    };
    let actual = match capture.contents() {
        Ok(bytes) => bytes,
        Err(e) => return errored(format_args!("failed to read captured output: {}", e)),
    };

    let mut outcome = Outcome::classify(code, stderr, compare(&expected, &actual));
    if with_diff {
        if let Outcome::Failed {
            reason: FailureReason::OutputMismatch { diff, .. },
        } = &mut outcome
        {
            *diff = Some(render_diff(&expected, &actual));
        }
    }
    outcome
}

fn errored(cause: impl std::fmt::Display) -> Outcome {
    Outcome::Errored {
        cause: cause.to_string(),
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
