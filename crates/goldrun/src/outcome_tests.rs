// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::compare::compare;
use rstest::rstest;

#[test]
fn zero_exit_and_equal_output_passes() {
    let outcome = Outcome::classify(Some(0), String::new(), None);
    assert_eq!(outcome, Outcome::Passed);
    assert!(outcome.is_passed());
}

#[test]
fn zero_exit_with_mismatch_fails() {
    let mismatch = compare(b"2\n", b"3\n");
    let outcome = Outcome::classify(Some(0), String::new(), mismatch);

    match outcome {
        Outcome::Failed {
            reason: FailureReason::OutputMismatch { mismatch, diff },
        } => {
            assert_eq!(mismatch.offset, 0);
            assert!(diff.is_none());
        }
        other => panic!("expected mismatch failure, got {:?}", other),
    }
}

#[rstest]
#[case(Some(1), false)]
#[case(Some(1), true)]
#[case(Some(-1), false)]
#[case(None, false)]
#[case(None, true)]
fn bad_exit_fails_regardless_of_output(#[case] code: Option<i32>, #[case] output_matches: bool) {
    let mismatch = if output_matches {
        None
    } else {
        compare(b"error\n", b"")
    };
    let outcome = Outcome::classify(code, "boom".to_string(), mismatch);

    assert_eq!(
        outcome,
        Outcome::Failed {
            reason: FailureReason::ExitStatus {
                code,
                stderr: "boom".to_string()
            }
        }
    );
    assert!(!outcome.is_passed());
}

#[rstest]
#[case(FailureReason::ExitStatus { code: Some(3), stderr: String::new() }, "exited with status 3")]
#[case(FailureReason::ExitStatus { code: None, stderr: String::new() }, "terminated by signal")]
#[case(FailureReason::MissingExpected { path: PathBuf::from("add.exp") }, "missing expected output 'add.exp'")]
#[case(FailureReason::Timeout { after: Duration::from_millis(1500) }, "timed out after 1500ms")]
#[case(
    FailureReason::Launch { message: "No such file or directory".to_string() },
    "failed to launch subject program: No such file or directory"
)]
fn failure_reason_display(#[case] reason: FailureReason, #[case] expected: &str) {
    assert_eq!(reason.to_string(), expected);
}
