// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transient capture files.
//!
//! Every fixture run writes the subject program's stdout into its own
//! uniquely named file, removed when the [`CaptureFile`] goes out of scope.

use std::fs::File;
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Name prefix of capture files
pub const CAPTURE_PREFIX: &str = ".goldrun-";
/// Name suffix of capture files
pub const CAPTURE_SUFFIX: &str = ".out";

/// Scratch file holding one fixture run's captured output.
#[derive(Debug)]
pub struct CaptureFile {
    file: NamedTempFile,
}

impl CaptureFile {
    /// Create a fresh capture file inside `dir`.
    pub fn create_in(dir: &Path) -> io::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(CAPTURE_PREFIX)
            .suffix(CAPTURE_SUFFIX)
            .tempfile_in(dir)?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// A second handle to the file, suitable for a child's stdout.
    pub fn writer(&self) -> io::Result<File> {
        self.file.reopen()
    }

    /// Read everything written so far.
    pub fn contents(&self) -> io::Result<Vec<u8>> {
        std::fs::read(self.file.path())
    }

    /// Remove the file now, logging instead of failing when removal fails.
    ///
    /// Dropping a `CaptureFile` also removes it, silently.
    pub fn remove(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove capture file");
        }
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
