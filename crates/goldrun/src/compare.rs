// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file comparison.
//!
//! Expected and actual output must be byte-for-byte identical. Nothing is
//! normalized: line endings, trailing whitespace and the final newline all
//! count.

use similar::TextDiff;

/// Lines of context shown around each hunk of a rendered diff
const DIFF_CONTEXT: usize = 3;

/// Where expected and actual output first disagree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Byte offset of the first difference
    pub offset: usize,
    /// 1-based line (in the expected output) holding that offset
    pub line: usize,
    pub expected_len: usize,
    pub actual_len: usize,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "output differs at line {}, byte {} (expected {} bytes, got {})",
            self.line, self.offset, self.expected_len, self.actual_len
        )
    }
}

/// Compare two outputs, returning the first mismatch if they differ.
pub fn compare(expected: &[u8], actual: &[u8]) -> Option<Mismatch> {
    let offset = first_difference(expected, actual)?;
    let line = 1 + expected[..offset.min(expected.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    Some(Mismatch {
        offset,
        line,
        expected_len: expected.len(),
        actual_len: actual.len(),
    })
}

/// Offset of the first differing byte.
///
/// When one input is a prefix of the other they differ at the shorter length.
pub fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(i) => Some(i),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}

/// Render a unified line diff of expected vs actual for humans.
///
/// Invalid UTF-8 is replaced lossily; this is display only and never decides
/// a verdict.
pub fn render_diff(expected: &[u8], actual: &[u8]) -> String {
    let expected = String::from_utf8_lossy(expected);
    let actual = String::from_utf8_lossy(actual);
    TextDiff::from_lines(expected.as_ref(), actual.as_ref())
        .unified_diff()
        .context_radius(DIFF_CONTEXT)
        .header("expected", "actual")
        .to_string()
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
