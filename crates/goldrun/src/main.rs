// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file test runner entry point.

use std::process::ExitCode;

use clap::Parser;

use goldrun::cli::Cli;
use goldrun::config::HarnessConfig;
use goldrun::exit_codes;
use goldrun::logging::init_tracing;
use goldrun::output_diagnostic::print_error;
use goldrun::report::Reporter;
use goldrun::{Harness, HarnessError, Tally};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(tally) if tally.all_passed() => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(_) => ExitCode::from(exit_codes::FAILURES as u8),
        Err(e) => {
            print_error(&e);
            ExitCode::from(exit_codes::ERROR as u8)
        }
    }
}

async fn run(cli: &Cli) -> Result<Tally, HarnessError> {
    let config = HarnessConfig::from_cli(cli)?;
    let harness = Harness::from_config(&config);
    let mut reporter = Reporter::new(std::io::stdout(), config.color).with_verbose(config.verbose);
    harness.run(&mut reporter).await
}
