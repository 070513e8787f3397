// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! gotest2action-events: `go test -json` event processing for gotest2action
//!
//! This library crate decodes the line-delimited event stream written by
//! `go test -json` (test2json) and reduces it to the set of failing tests.
//!
//! # Example
//!
//! ```no_run
//! use gotest2action_events::stream::parse_events;
//!
//! let input = br#"{"Action":"fail","Package":"example.com/m","Test":"TestA"}"#;
//! let events = parse_events(&input[..], None).unwrap();
//!
//! let failing = events.failing();
//! for key in failing.sorted_keys() {
//!     println!("{key} failed");
//! }
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod error;
pub mod event;
pub mod stream;

pub use aggregate::{EventGroup, EventGroups, SYNTHETIC_PACKAGE};
pub use error::EventsError;
pub use event::{Action, TERMINAL_ACTIONS, TestEvent, TestEvents, top_level_test};
pub use stream::{StreamingParser, parse_events};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::aggregate::{EventGroup, EventGroups};
    pub use crate::error::EventsError;
    pub use crate::event::{Action, TestEvent, TestEvents};
    pub use crate::stream::{StreamingParser, parse_events};
}
