// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! GitHub Actions workflow-command annotations
//!
//! An error annotation is a single line on stdout:
//!
//! ```text
//! ::error file=./pkg/foo_test.go,line=12,col=0::message with %0A for newlines
//! ```
//!
//! Escaping is done here, so callers pass plain message text.

use std::io::{self, Write};

use gotest2action_locate::SourceLocation;

/// Something that accepts error annotations
pub trait AnnotationSink {
    /// Emit one error annotation, optionally pinned to a source location
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the annotation cannot be written.
    fn error(&mut self, message: &str, location: Option<&SourceLocation>) -> io::Result<()>;
}

/// Writes annotations as GitHub Actions workflow commands
#[derive(Debug)]
pub struct WorkflowCommands<W> {
    writer: W,
}

impl<W: Write> WorkflowCommands<W> {
    /// Create an emitter writing to `writer`
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AnnotationSink for WorkflowCommands<W> {
    fn error(&mut self, message: &str, location: Option<&SourceLocation>) -> io::Result<()> {
        let message = escape_data(message);
        match location {
            Some(location) => writeln!(
                self.writer,
                "::error file={},line={},col=0::{message}",
                escape_property(&location.file),
                location.line,
            ),
            None => writeln!(self.writer, "::error::{message}"),
        }
    }
}

/// Escape a command's message so it stays on one line
#[must_use]
pub fn escape_data(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a command property value (`file=...`)
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn render(message: &str, location: Option<&SourceLocation>) -> String {
        let mut commands = WorkflowCommands::new(Vec::new());
        commands.error(message, location).expect("write");
        String::from_utf8(commands.into_inner()).expect("utf8")
    }

    #[test]
    fn test_error_with_location() {
        let location = SourceLocation {
            file: "./internal/dummy_test.go".to_string(),
            line: 8,
        };
        assert_eq!(
            render("boom", Some(&location)),
            "::error file=./internal/dummy_test.go,line=8,col=0::boom\n"
        );
    }

    #[test]
    fn test_error_without_location() {
        assert_eq!(render("boom", None), "::error::boom\n");
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(
            escape_data("=== RUN   TestA\nhello\r\n100%"),
            "=== RUN   TestA%0Ahello%0D%0A100%25"
        );
        assert_eq!(escape_data("a:b,c"), "a:b,c");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("C:\\src\\a,b.go"), "C%3A\\src\\a%2Cb.go");
        assert_eq!(escape_property("50%"), "50%25");
    }

    #[test]
    fn test_multiline_message_is_one_line() {
        let rendered = render("line one\nline two\n", None);
        assert_eq!(rendered.lines().count(), 1);
        assert_eq!(rendered, "::error::line one%0Aline two%0A\n");
    }
}
