// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for streaming parser
//!
//! This fuzzes the `StreamingParser` which processes `go test -json`
//! output line-by-line incrementally.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest2action_events::StreamingParser;

fuzz_target!(|data: &[u8]| {
    let mut parser = StreamingParser::new();

    // Process each line - parser should never panic
    for line in data.split(|&b| b == b'\n') {
        let _ = parser.process_line(line);
    }

    // Aggregation should never panic
    let _ = parser.finish().failing();
});
