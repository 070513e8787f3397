// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for `parse_events` with passthrough enabled

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest2action_events::{Action, parse_events};

fuzz_target!(|data: &[u8]| {
    let mut sink = Vec::new();
    let events = parse_events(data, Some(&mut sink)).expect("reading from a slice cannot fail");

    let expected: usize = events
        .iter()
        .filter(|e| e.action == Action::Output)
        .map(|e| e.output.len())
        .sum();
    assert_eq!(sink.len(), expected);
});
