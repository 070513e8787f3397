// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! gotest2action-locate: Go test declaration lookup for gotest2action
//!
//! This library crate maps a Go package import path and test name back to
//! the file and line where the test function is declared, by scanning the
//! Go sources of the package directory.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gotest2action_locate::Locator;
//!
//! let locator = Locator::new("/src/myrepo", "github.com/me/myrepo");
//! let location = locator
//!     .locate("github.com/me/myrepo/internal", "TestParse/empty_input")
//!     .expect("locate test");
//!
//! println!("{}:{}", location.file, location.line);
//! ```

pub mod error;
pub mod locator;
pub mod scanner;

pub use error::{LocateError, ScanError};
pub use locator::{Locator, SourceLocation, locate};
pub use scanner::{FuncDecl, function_declarations};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::LocateError;
    pub use crate::locator::{Locator, SourceLocation};
}
