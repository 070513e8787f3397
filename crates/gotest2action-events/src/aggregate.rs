// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Failure aggregation
//!
//! The aggregation pipeline is a chain of consuming transforms over the
//! decoded event stream:
//!
//! ```text
//! events.with_test().with_package().by_key().filter_by_result(Action::Fail)
//! ```
//!
//! Each stage returns a new collection, so every stage can be checked on
//! its own. Nothing here fails or performs I/O.

use std::collections::BTreeMap;

use crate::event::{Action, TestEvent, TestEvents};

/// Package name `go test` reports when run on files instead of a package
pub const SYNTHETIC_PACKAGE: &str = "command-line-arguments";

impl TestEvents {
    /// Keep only events that belong to a test (drops package-level events)
    #[must_use]
    pub fn with_test(self) -> Self {
        self.retain(|event| !event.test.is_empty())
    }

    /// Keep only events attributed to a real package
    ///
    /// Drops events with no package and events for [`SYNTHETIC_PACKAGE`].
    #[must_use]
    pub fn with_package(self) -> Self {
        self.retain(|event| !event.package.is_empty() && event.package != SYNTHETIC_PACKAGE)
    }

    /// Partition the events into groups keyed by `package:test`
    #[must_use]
    pub fn by_key(self) -> EventGroups {
        let mut groups: BTreeMap<String, EventGroup> = BTreeMap::new();
        for event in self {
            groups.entry(event.key()).or_default().events.push(event);
        }
        EventGroups(groups)
    }

    /// Run the full pipeline and return the failing tests
    #[must_use]
    pub fn failing(self) -> EventGroups {
        self.with_test()
            .with_package()
            .by_key()
            .filter_by_result(Action::Fail)
    }
}

/// All events of one test, in stream order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventGroup {
    events: Vec<TestEvent>,
}

impl EventGroup {
    /// The events in this group
    #[must_use]
    pub fn events(&self) -> &[TestEvent] {
        &self.events
    }

    /// The terminal event of the test
    ///
    /// This is the first event, in stream order, whose action is pass or
    /// fail. Pass and fail have equal standing: whichever comes first wins
    /// and any later terminal events are ignored.
    #[must_use]
    pub fn result(&self) -> Option<&TestEvent> {
        self.events.iter().find(|event| event.action.is_terminal())
    }

    /// All captured output of the group, concatenated in order
    #[must_use]
    pub fn output(&self) -> String {
        self.events.iter().map(|event| event.output.as_str()).collect()
    }
}

impl From<Vec<TestEvent>> for EventGroup {
    fn from(events: Vec<TestEvent>) -> Self {
        Self { events }
    }
}

/// Event groups keyed by `package:test`, iterated in key order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventGroups(BTreeMap<String, EventGroup>);

impl EventGroups {
    /// Keep only groups whose terminal event has the given action
    ///
    /// Groups without any terminal event are dropped whatever `action` is.
    #[must_use]
    pub fn filter_by_result(self, action: Action) -> Self {
        Self(
            self.0
                .into_iter()
                .filter(|(_, group)| group.result().is_some_and(|event| event.action == action))
                .collect(),
        )
    }

    /// Group keys in lexicographic order
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Look up a group by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EventGroup> {
        self.0.get(key)
    }

    /// Iterate over `(key, group)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EventGroup)> {
        self.0.iter().map(|(key, group)| (key.as_str(), group))
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no groups
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
