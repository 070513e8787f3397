// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Error types for gotest2action-events

use thiserror::Error;

/// Errors that can occur while reading a test event stream
///
/// Undecodable lines are not errors; they are skipped by the parser.
#[derive(Debug, Error)]
pub enum EventsError {
    /// Error reading the input stream
    #[error("IO error reading test events: {0}")]
    Io(#[source] std::io::Error),

    /// Error writing captured output to the passthrough sink
    #[error("IO error writing passthrough output: {0}")]
    Passthrough(#[source] std::io::Error),
}
