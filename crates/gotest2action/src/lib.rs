// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! gotest2action library
//!
//! This module exports the core functionality of gotest2action for use in
//! integration tests and as a library.

pub mod annotation;
pub mod config;
pub mod report;
