// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file test runner.
//!
//! Discovers fixture pairs (`<name>.sql` input, `<name>.exp` expected
//! output) in a directory, runs a subject program once per fixture as
//! `<program> <input>`, and compares its stdout byte-for-byte against the
//! expected file. A fixture passes only when the program exits with status 0
//! and the output is identical.
//!
//! ```no_run
//! use goldrun::harness::Harness;
//! use goldrun::report::Reporter;
//! use goldrun::subject::SubjectProgram;
//!
//! # async fn example() -> Result<(), goldrun::harness::HarnessError> {
//! let harness = Harness::new("tests/fixtures", SubjectProgram::new("./client"));
//! let mut reporter = Reporter::new(std::io::stdout(), false);
//! let tally = harness.run(&mut reporter).await?;
//! assert_eq!(tally.passed + tally.failed, tally.total());
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod cli;
pub mod compare;
pub mod config;
pub mod fixture;
pub mod harness;
pub mod logging;
pub mod outcome;
pub mod output_diagnostic;
pub mod report;
pub mod subject;

pub use harness::{exit_codes, Harness, HarnessError};
pub use outcome::{FailureReason, Outcome, RunResult};
pub use report::Tally;
