// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture discovery.
//!
//! A fixture is a pair of files sharing a base name: an input file handed to
//! the subject program and an expected-output file holding the golden result.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default extension of fixture input files
pub const DEFAULT_INPUT_EXTENSION: &str = "sql";
/// Default extension of expected-output files
pub const DEFAULT_EXPECTED_EXTENSION: &str = "exp";

/// Errors that can occur while discovering fixtures
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Failed to read fixture directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single named fixture
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    /// Base name shared by the input and expected files
    pub name: String,
    /// Path to the input file
    pub input: PathBuf,
    /// Path to the expected-output file (may not exist)
    pub expected: PathBuf,
}

impl Fixture {
    /// Build a fixture from a directory, a base name and the two extensions.
    pub fn new(dir: &Path, name: &str, input_ext: &str, expected_ext: &str) -> Self {
        Self {
            name: name.to_string(),
            input: dir.join(format!("{}.{}", name, input_ext)),
            expected: dir.join(format!("{}.{}", name, expected_ext)),
        }
    }
}

/// File naming scheme used to pair inputs with expected outputs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureLayout {
    pub input_extension: String,
    pub expected_extension: String,
}

impl Default for FixtureLayout {
    fn default() -> Self {
        Self {
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
            expected_extension: DEFAULT_EXPECTED_EXTENSION.to_string(),
        }
    }
}

impl FixtureLayout {
    /// Create a layout, accepting extensions with or without a leading dot.
    pub fn new(input_extension: &str, expected_extension: &str) -> Self {
        Self {
            input_extension: normalize_extension(input_extension),
            expected_extension: normalize_extension(expected_extension),
        }
    }

    /// Base name of `path` if it names an input file, `None` otherwise.
    fn base_name<'a>(&self, path: &'a Path) -> Option<&'a str> {
        if !path.extension().is_some_and(|e| e == self.input_extension.as_str()) {
            return None;
        }
        path.file_stem().and_then(|s| s.to_str())
    }

    /// List every fixture in `dir`, sorted by name.
    ///
    /// Only regular files (or symlinks to them) whose extension matches the
    /// input extension are fixtures. The expected file is not checked here; a
    /// missing one is reported when the fixture runs.
    pub fn discover(&self, dir: &Path) -> Result<Vec<Fixture>, DiscoveryError> {
        let entries = std::fs::read_dir(dir).map_err(|source| DiscoveryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DiscoveryError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.file_name().and_then(|n| n.to_str()).is_none() {
                tracing::warn!(path = %path.display(), "skipping entry with non UTF-8 name");
                continue;
            }
            if let Some(name) = self.base_name(&path) {
                names.push(name.to_string());
            }
        }
        names.sort();

        tracing::debug!(dir = %dir.display(), count = names.len(), "discovered fixtures");

        Ok(names
            .iter()
            .map(|name| {
                Fixture::new(dir, name, &self.input_extension, &self.expected_extension)
            })
            .collect())
    }
}

/// Keep fixtures whose name contains any of `filters`; all of them when empty.
pub fn select(fixtures: Vec<Fixture>, filters: &[String]) -> Vec<Fixture> {
    if filters.is_empty() {
        return fixtures;
    }
    fixtures
        .into_iter()
        .filter(|f| filters.iter().any(|pat| f.name.contains(pat.as_str())))
        .collect()
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_string()
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
