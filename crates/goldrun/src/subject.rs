// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subject program execution.
//!
//! The subject program is a black box invoked as `<program> <input>`. Its
//! stdout goes straight into a capture file, stdin is closed, and stderr is
//! collected for failure details.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// How a single invocation of the subject program ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubjectRun {
    /// Process ran to completion; `code` is `None` when killed by a signal
    Exited { code: Option<i32>, stderr: String },
    /// Process exceeded the timeout and was killed
    TimedOut { after: Duration },
    /// Process could not be spawned
    LaunchFailed { message: String },
}

#[derive(Debug, Error)]
pub enum SubjectError {
    #[error("Failed to wait for subject program: {0}")]
    Wait(#[source] std::io::Error),
}

/// The program under test
#[derive(Clone, Debug)]
pub struct SubjectProgram {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl SubjectProgram {
    /// Create a subject program with no timeout.
    ///
    /// A relative path with a directory part (`./client`) is anchored to the
    /// current working directory, since the program runs from the fixture
    /// directory. Bare names are left for `PATH` lookup.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let program = if program.components().count() > 1 {
            anchored(program)
        } else {
            program
        };
        Self {
            program,
            timeout: None,
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run the program on `input` with `cwd` as working directory, writing
    /// its stdout into `stdout`.
    pub async fn run(
        &self,
        input: &Path,
        cwd: &Path,
        stdout: File,
    ) -> Result<SubjectRun, SubjectError> {
        tracing::debug!(
            program = %self.program.display(),
            input = %input.display(),
            "spawning subject program"
        );

        let child = Command::new(&self.program)
            .arg(input)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::piped())
            .kill_on_drop(true) // a timed out child dies with its handle
            .spawn();
        let child = match child {
            Ok(child) => child,
            Err(e) => {
                return Ok(SubjectRun::LaunchFailed {
                    message: e.to_string(),
                })
            }
        };

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result.map_err(SubjectError::Wait)?,
                Err(_) => return Ok(SubjectRun::TimedOut { after: limit }),
            },
            None => child.wait_with_output().await.map_err(SubjectError::Wait)?,
        };

        Ok(SubjectRun::Exited {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Make `path` absolute against the current working directory, keeping it
/// as given when that directory cannot be determined.
pub(crate) fn anchored(path: PathBuf) -> PathBuf {
    match std::path::absolute(&path) {
        Ok(absolute) => absolute,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not make path absolute");
            path
        }
    }
}

#[cfg(test)]
#[path = "subject_tests.rs"]
mod tests;
