// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! gotest2action: GitHub Actions annotations for failing Go tests
//!
//! Reads `go test -json` output on stdin and writes one `::error` workflow
//! command per failing test to stdout. Exits non-zero when any test failed.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use gotest2action::config::Config;
use gotest2action::report::output_failures;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries annotations and passthrough output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match run(&config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<usize> {
    for warning in config.warnings() {
        warn!(%warning, "Failing tests will be reported without a location");
    }
    let options = config.report_options()?;
    debug!(
        root_path = %options.root_path.display(),
        root_package = %options.root_package,
        "Reading test events from stdin"
    );

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let failures = output_failures(stdin, &mut stdout, &options)
        .context("failed processing test events")?;
    stdout.flush().context("failed flushing stdout")?;

    Ok(failures)
}
