// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Failure reporting
//!
//! Reads a `go test -json` stream, finds the failing tests, looks up where
//! each one is declared and writes one error annotation per failing test.
//!
//! # Example
//!
//! ```no_run
//! use gotest2action::report::{ReportOptions, output_failures};
//!
//! let options = ReportOptions::new("/src/myrepo", "github.com/me/myrepo");
//! let stdin = std::io::stdin().lock();
//! let mut stdout = std::io::stdout().lock();
//! let failures = output_failures(stdin, &mut stdout, &options).expect("report");
//! println!("{failures} failing tests");
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use gotest2action_events::{EventGroups, EventsError, parse_events};
use gotest2action_locate::Locator;
use thiserror::Error;
use tracing::{debug, info};

use crate::annotation::{AnnotationSink, WorkflowCommands};

/// Annotation text used when a failing test printed nothing
pub const NO_OUTPUT_MESSAGE: &str = "a test failed with no output ¯\\_(ツ)_/¯ ";

/// Which captured output becomes the annotation message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MessageSource {
    /// Everything the test printed, in order
    #[default]
    #[value(name = "output")]
    GroupOutput,
    /// Only the output attached to the test's pass/fail event
    #[value(name = "result")]
    ResultOutput,
}

/// Settings for one reporting run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Directory holding the root package
    pub root_path: PathBuf,
    /// Import path of the root package
    pub root_package: String,
    /// Mirror captured test output to the output stream while reading
    pub passthrough: bool,
    /// Which output becomes the annotation message
    pub message: MessageSource,
}

impl ReportOptions {
    /// Options with passthrough off and the default message source
    #[must_use]
    pub fn new(root_path: impl Into<PathBuf>, root_package: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            root_package: root_package.into(),
            passthrough: false,
            message: MessageSource::default(),
        }
    }
}

/// Reporting errors
///
/// Only stream failures are errors. A failing test whose declaration cannot
/// be found is still reported, just without a location.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading events or writing passthrough output failed
    #[error(transparent)]
    Events(#[from] EventsError),

    /// Writing an annotation failed
    #[error("failed writing annotation: {0}")]
    Annotation(#[source] io::Error),
}

/// Report every failing test in `input` as an annotation on `output`
///
/// Returns the number of failing tests.
///
/// # Errors
///
/// Returns a `ReportError` if reading `input` or writing `output` fails.
pub fn output_failures<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: &ReportOptions,
) -> Result<usize, ReportError> {
    let events = if options.passthrough {
        parse_events(input, Some(&mut *output))?
    } else {
        parse_events(input, None)?
    };

    let failing = events.failing();
    let locator = Locator::new(options.root_path.clone(), options.root_package.clone());
    let mut commands = WorkflowCommands::new(&mut *output);
    report_failures(&failing, &locator, options.message, &mut commands)
        .map_err(ReportError::Annotation)?;

    info!(failures = failing.len(), "Reported failing tests");
    Ok(failing.len())
}

/// Emit one annotation per failing group, in key order
///
/// # Errors
///
/// Returns the sink's I/O error. Location lookups never fail the report.
pub fn report_failures(
    failing: &EventGroups,
    locator: &Locator,
    message: MessageSource,
    sink: &mut impl AnnotationSink,
) -> io::Result<()> {
    for (key, group) in failing.iter() {
        let Some(result) = group.result() else {
            continue;
        };

        let location = match locator.locate(&result.package, &result.test) {
            Ok(location) => Some(location),
            Err(err) => {
                debug!(key, error = %err, "Location unavailable");
                None
            }
        };

        let text = match message {
            MessageSource::GroupOutput => group.output(),
            MessageSource::ResultOutput => result.output.clone(),
        };
        let text = if text.is_empty() {
            NO_OUTPUT_MESSAGE
        } else {
            text.as_str()
        };

        sink.error(text, location.as_ref())?;
    }
    Ok(())
}
