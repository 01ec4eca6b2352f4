// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Golden-file test runner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "goldrun",
    version,
    about = "Run a program against golden-file fixtures and compare its output"
)]
pub struct Cli {
    /// Only run fixtures whose name contains one of these substrings
    #[arg(value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Subject program, invoked as `<PROGRAM> <input-file>`
    #[arg(short = 'p', long, env = "GOLDRUN_PROGRAM")]
    pub program: Option<PathBuf>,

    /// Directory holding the fixtures
    #[arg(short = 'd', long, env = "GOLDRUN_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Per-fixture timeout in milliseconds (0 disables it)
    #[arg(long, env = "GOLDRUN_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Config file (default: goldrun.toml in the fixture directory, if present)
    #[arg(short = 'c', long, env = "GOLDRUN_CONFIG")]
    pub config: Option<PathBuf>,

    /// When to color the report
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Show failure details (-v); also enable debug logging (-vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Color mode for the report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
