// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Line-delimited event stream parsing
//!
//! `go test -json` writes one JSON object per line, but the stream commonly
//! carries other text as well (build errors, `go: downloading ...` lines).
//! Lines that do not decode as an event are skipped, never fatal.
//!
//! # Example
//!
//! ```no_run
//! use gotest2action_events::stream::StreamingParser;
//!
//! let mut parser = StreamingParser::new();
//! parser.process_line(br#"{"Action":"run","Package":"p","Test":"TestA"}"#);
//! parser.process_line(b"not json");
//! assert_eq!(parser.skipped(), 1);
//!
//! let events = parser.finish();
//! assert_eq!(events.len(), 1);
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::EventsError;
use crate::event::{Action, TestEvent, TestEvents};

// ============================================================================
// Streaming Parser for incremental parsing
// ============================================================================

/// A streaming parser for `go test -json` output
#[derive(Debug, Default)]
pub struct StreamingParser {
    events: TestEvents,
    skipped: usize,
}

impl StreamingParser {
    /// Create a new streaming parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single line of output
    ///
    /// Returns the decoded event, or `None` if the line was blank or not a
    /// valid event. The line does not need to be valid UTF-8.
    pub fn process_line(&mut self, line: &[u8]) -> Option<&TestEvent> {
        let line = line.trim_ascii();
        if line.is_empty() {
            return None;
        }

        match serde_json::from_slice::<TestEvent>(line) {
            Ok(event) => {
                self.events.push(event);
                self.events.as_slice().last()
            }
            Err(err) => {
                trace!(error = %err, "Skipping undecodable line");
                self.skipped += 1;
                None
            }
        }
    }

    /// Number of non-blank lines that could not be decoded
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Get all events decoded so far
    #[must_use]
    pub fn events(&self) -> &TestEvents {
        &self.events
    }

    /// Finalize and return the decoded events, in input order
    #[must_use]
    pub fn finish(self) -> TestEvents {
        self.events
    }
}

/// Read every event from `reader`
///
/// When `passthrough` is given, the captured text of each `output` event is
/// written to it (and flushed) as soon as the event is decoded, so a caller
/// piping live output sees it while the test run is still going.
///
/// # Errors
///
/// Returns `EventsError::Io` if reading fails and `EventsError::Passthrough`
/// if writing to the passthrough sink fails. Malformed lines are not errors.
pub fn parse_events<R: BufRead>(
    mut reader: R,
    mut passthrough: Option<&mut dyn Write>,
) -> Result<TestEvents, EventsError> {
    let mut parser = StreamingParser::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(EventsError::Io)?;
        if read == 0 {
            break;
        }

        let Some(event) = parser.process_line(&line) else {
            continue;
        };

        if let Some(sink) = passthrough.as_deref_mut()
            && event.action == Action::Output
        {
            sink.write_all(event.output.as_bytes())
                .and_then(|()| sink.flush())
                .map_err(EventsError::Passthrough)?;
        }
    }

    debug!(
        events = parser.events().len(),
        skipped = parser.skipped(),
        "Finished reading test events"
    );

    Ok(parser.finish())
}
