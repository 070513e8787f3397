// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Test event types
//!
//! One [`TestEvent`] corresponds to one JSON object written by
//! `go test -json`:
//!
//! ```text
//! {"Time":"2026-01-05T10:00:00.1-05:00","Action":"output","Package":"example.com/m","Test":"TestA","Output":"=== RUN   TestA\n"}
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actions that end a test: the first of these seen for a test is its result.
pub const TERMINAL_ACTIONS: [Action; 2] = [Action::Pass, Action::Fail];

/// The kind of a reported test event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// The test has started running
    Run,
    /// The test has been paused
    Pause,
    /// The test has continued running
    Cont,
    /// The test passed
    Pass,
    /// The benchmark printed log output but did not fail
    Bench,
    /// The test or benchmark failed
    Fail,
    /// The test printed output
    Output,
    /// The test was skipped or the package contained no tests
    Skip,
    /// The test binary is about to be executed
    Start,
    /// Any action not listed above, or no action at all
    #[default]
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Whether this action ends a test (pass or fail)
    #[must_use]
    pub fn is_terminal(self) -> bool {
        TERMINAL_ACTIONS.contains(&self)
    }

    /// The action as it appears on the wire
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Pause => "pause",
            Self::Cont => "cont",
            Self::Pass => "pass",
            Self::Bench => "bench",
            Self::Fail => "fail",
            Self::Output => "output",
            Self::Skip => "skip",
            Self::Start => "start",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single event from `go test -json` output
///
/// Every field is optional on the wire. Missing fields take their empty
/// value, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TestEvent {
    /// When the event happened (informational only)
    #[serde(alias = "time", skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// What happened
    #[serde(alias = "action")]
    pub action: Action,
    /// Import path of the package under test
    #[serde(alias = "package")]
    pub package: String,
    /// Test name; empty for package-level events, `Parent/child` for subtests
    #[serde(alias = "test")]
    pub test: String,
    /// Elapsed seconds (informational only)
    #[serde(alias = "elapsed")]
    pub elapsed: f64,
    /// Captured output fragment
    #[serde(alias = "output")]
    pub output: String,
}

impl TestEvent {
    /// Create an event with the given action, package and test name
    #[must_use]
    pub fn new(action: Action, package: impl Into<String>, test: impl Into<String>) -> Self {
        Self {
            action,
            package: package.into(),
            test: test.into(),
            ..Default::default()
        }
    }

    /// Attach captured output to the event
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Grouping key: `package:test`
    ///
    /// This is plain concatenation, so a test name containing `:` can
    /// collide with a different package/test split.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.package, self.test)
    }

    /// The top-level test name, without any `/subtest` suffix
    #[must_use]
    pub fn top_level_test(&self) -> &str {
        top_level_test(&self.test)
    }

    /// Elapsed time as a [`Duration`]; invalid values map to zero
    #[must_use]
    pub fn elapsed_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.elapsed).unwrap_or_default()
    }
}

/// Strip any `/subtest` path from a test name
#[must_use]
pub fn top_level_test(test: &str) -> &str {
    test.split('/').next().unwrap_or(test)
}

/// An ordered sequence of test events, in stream order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestEvents(Vec<TestEvent>);

impl TestEvents {
    /// Create an empty sequence
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an event
    pub fn push(&mut self, event: TestEvent) {
        self.0.push(event);
    }

    /// Number of events
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no events
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the events in order
    pub fn iter(&self) -> std::slice::Iter<'_, TestEvent> {
        self.0.iter()
    }

    /// The events as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[TestEvent] {
        &self.0
    }

    /// Keep only the events matching `predicate`, preserving order
    #[must_use]
    pub(crate) fn retain(mut self, predicate: impl FnMut(&TestEvent) -> bool) -> Self {
        self.0.retain(predicate);
        self
    }
}

impl From<Vec<TestEvent>> for TestEvents {
    fn from(events: Vec<TestEvent>) -> Self {
        Self(events)
    }
}

impl FromIterator<TestEvent> for TestEvents {
    fn from_iter<I: IntoIterator<Item = TestEvent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TestEvents {
    type Item = TestEvent;
    type IntoIter = std::vec::IntoIter<TestEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TestEvents {
    type Item = &'a TestEvent;
    type IntoIter = std::slice::Iter<'a, TestEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
