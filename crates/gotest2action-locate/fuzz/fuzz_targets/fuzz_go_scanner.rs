// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for the Go declaration scanner
//!
//! Arbitrary text must either scan or produce a `ScanError`, and every
//! reported line must exist in the input.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest2action_locate::function_declarations;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Ok(decls) = function_declarations(source) {
            let lines = source.lines().count().max(1);
            for decl in decls {
                assert!(decl.line >= 1 && decl.line <= lines);
                assert!(!decl.name.is_empty());
            }
        }
    }
});
