// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags (with environment fallbacks), an optional TOML file, and built-in
//! defaults.

use crate::cli::Cli;
use crate::fixture::{FixtureLayout, DEFAULT_EXPECTED_EXTENSION, DEFAULT_INPUT_EXTENSION};
use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Config file looked up in the fixture directory when none is given
pub const CONFIG_FILE_NAME: &str = "goldrun.toml";
/// Default per-fixture timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Errors that can occur while building the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to resolve path '{path}': {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No subject program configured (use --program, GOLDRUN_PROGRAM or `program` in goldrun.toml)")]
    MissingProgram,

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Contents of a `goldrun.toml` file
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Subject program; relative paths are resolved against the file's directory
    #[serde(default)]
    pub program: Option<PathBuf>,

    /// Per-fixture timeout in milliseconds (0 disables it)
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Extension of fixture inputs (default: "sql")
    #[serde(default)]
    pub input_extension: Option<String>,

    /// Extension of expected outputs (default: "exp")
    #[serde(default)]
    pub expected_extension: Option<String>,
}

impl FileConfig {
    /// Load a config file, resolving a relative `program` path against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: FileConfig = toml::from_str(&content)?;

        if let Some(program) = config.program.take() {
            let base = path.parent().unwrap_or(Path::new("."));
            config.program = Some(if has_separator(&program) && program.is_relative() {
                base.join(program)
            } else {
                program
            });
        }
        Ok(config)
    }
}

/// Fully resolved settings for one harness run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Absolute fixture directory
    pub dir: PathBuf,
    pub program: PathBuf,
    /// `None` means wait indefinitely
    pub timeout: Option<Duration>,
    pub layout: FixtureLayout,
    pub filters: Vec<String>,
    pub color: bool,
    /// Print failure details
    pub verbose: bool,
}

impl HarnessConfig {
    /// Build the configuration from parsed arguments, reading the config
    /// file if one is named or present in the fixture directory.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let dir = absolute(&cli.dir)?;
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => {
                let implicit = dir.join(CONFIG_FILE_NAME);
                if implicit.is_file() {
                    FileConfig::load(&implicit)?
                } else {
                    FileConfig::default()
                }
            }
        };
        Self::merge(cli, dir, file, std::io::stdout().is_terminal())
    }

    /// Combine arguments and file settings; arguments win.
    pub fn merge(
        cli: &Cli,
        dir: PathBuf,
        file: FileConfig,
        stdout_is_terminal: bool,
    ) -> Result<Self, ConfigError> {
        let program = cli
            .program
            .clone()
            .or(file.program)
            .ok_or(ConfigError::MissingProgram)?;
        if program.as_os_str().is_empty() {
            return Err(ConfigError::MissingProgram);
        }
        let program = resolve_program(&program)?;

        let timeout_ms = cli
            .timeout_ms
            .or(file.timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let timeout = (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms));

        let layout = FixtureLayout::new(
            file.input_extension
                .as_deref()
                .unwrap_or(DEFAULT_INPUT_EXTENSION),
            file.expected_extension
                .as_deref()
                .unwrap_or(DEFAULT_EXPECTED_EXTENSION),
        );
        validate_layout(&layout)?;

        Ok(Self {
            dir,
            program,
            timeout,
            layout,
            filters: cli.filters.clone(),
            color: cli.color.enabled(stdout_is_terminal),
            verbose: cli.verbose > 0,
        })
    }
}

fn validate_layout(layout: &FixtureLayout) -> Result<(), ConfigError> {
    if layout.input_extension.is_empty() || layout.expected_extension.is_empty() {
        return Err(ConfigError::Validation(
            "fixture extensions must not be empty".to_string(),
        ));
    }
    if layout.input_extension == layout.expected_extension {
        return Err(ConfigError::Validation(format!(
            "input and expected extensions must differ (both '{}')",
            layout.input_extension
        )));
    }
    Ok(())
}

fn has_separator(path: &Path) -> bool {
    path.components().count() > 1
}

/// Make a program path with a directory part absolute; bare names are left
/// for `PATH` lookup.
fn resolve_program(program: &Path) -> Result<PathBuf, ConfigError> {
    if has_separator(program) {
        absolute(program)
    } else {
        Ok(program.to_path_buf())
    }
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
